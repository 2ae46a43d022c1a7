use super::*;

#[test]
fn stat_cards_are_ordered_and_formatted() {
    let stats = ChannelStats {
        total_views: 1_234_567,
        total_subscribers: 4321,
        total_videos: 12,
        total_likes: 890,
    };
    let cards = stat_cards(&stats);
    assert_eq!(cards[0], ("Total Views", "1.2M".to_owned()));
    assert_eq!(cards[1], ("Subscribers", "4321".to_owned()));
    assert_eq!(cards[2], ("Videos", "12".to_owned()));
    assert_eq!(cards[3], ("Likes", "890".to_owned()));
}

#[test]
fn stat_cards_handle_a_fresh_channel() {
    let cards = stat_cards(&ChannelStats::default());
    assert!(cards.iter().all(|(_, value)| value == "0"));
}
