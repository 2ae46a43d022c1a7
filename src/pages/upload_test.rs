use super::*;

#[test]
fn upload_requires_both_files_before_field_checks() {
    let expected = Err("Please select both video and thumbnail files");
    assert_eq!(validate_upload("My video", false, true), expected);
    assert_eq!(validate_upload("My video", true, false), expected);
    assert_eq!(validate_upload("", false, false), expected);
}

#[test]
fn upload_requires_a_title() {
    assert_eq!(validate_upload("   ", true, true), Err("Title is required"));
}

#[test]
fn upload_trims_the_title() {
    assert_eq!(validate_upload("  My video  ", true, true), Ok("My video".to_owned()));
}
