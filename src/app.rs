//! Root application component: context providers, router, and the
//! startup session check.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::protected::Protected;
use crate::components::toast_host::ToastHost;
use crate::pages::channel::ChannelPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::liked_videos::LikedVideosPage;
use crate::pages::login::LoginPage;
use crate::pages::playlist_detail::PlaylistDetailPage;
use crate::pages::playlists::PlaylistsPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::search::SearchPage;
use crate::pages::subscriptions::SubscriptionsPage;
use crate::pages::upload::UploadPage;
use crate::pages::video_detail::VideoDetailPage;
use crate::pages::watch_history::WatchHistoryPage;
use crate::state::session::Session;
use crate::state::toast::Toasts;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the one [`Session`] and [`Toasts`] instance per running client,
/// provides them via context, kicks off the startup session check, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = Toasts::new();
    let session = Session::new(toasts);
    provide_context(toasts);
    provide_context(session);

    // Resolve the stored token into a session exactly once at startup;
    // route guards hold navigation until this completes.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.check().await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/videotube.css"/>
        <Title text="VideoTube"/>

        <Router>
            <ToastHost/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>

                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                    <Route path=(StaticSegment("video"), ParamSegment("id")) view=VideoDetailPage/>
                    <Route path=(StaticSegment("channel"), ParamSegment("username")) view=ChannelPage/>
                    <Route path=(StaticSegment("playlist"), ParamSegment("id")) view=PlaylistDetailPage/>
                    <Route
                        path=StaticSegment("subscriptions")
                        view=|| view! { <Protected><SubscriptionsPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("liked-videos")
                        view=|| view! { <Protected><LikedVideosPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("history")
                        view=|| view! { <Protected><WatchHistoryPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("playlists")
                        view=|| view! { <Protected><PlaylistsPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("upload")
                        view=|| view! { <Protected><UploadPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <Protected><DashboardPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <Protected><ProfilePage/></Protected> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
