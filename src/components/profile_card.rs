use dioxus::prelude::*;
use crate::components::appreciation_overlay::AppreciationOverlay;
use crate::components::icons::{HeartIcon, InfoIcon, MailIcon, MapPinIcon, RefreshIcon, UserIcon};
use crate::hooks::{use_appreciation, use_random_user, FetchState};
use crate::services::random_user::UserProfile;

/// Random user generator: fetch button, status line and the profile card
#[component]
pub fn ProfileCard() -> Element {
    let fetch = use_random_user();
    let appreciation = use_appreciation();

    // Loading, error and profile are rendered independently of each other
    let FetchState { profile, loading, error } = fetch.state.read().clone();
    let appreciation_visible = appreciation.state.read().visible;

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen bg-background text-foreground p-4",

            h1 {
                class: "text-3xl font-bold mb-4",
                "Random User Generator"
            }
            p {
                class: "text-muted-foreground mb-6",
                "Click the button below to fetch a random user's profile."
            }

            button {
                class: "mb-6 px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition flex items-center gap-2",
                onclick: move |_| fetch.refetch.call(()),
                RefreshIcon { class: "w-4 h-4".to_string() }
                "Fetch New User"
            }

            if loading {
                div {
                    class: "flex items-center justify-center mb-4",
                    span {
                        class: "inline-block w-6 h-6 mr-2 border-2 border-blue-500 border-t-transparent rounded-full animate-spin"
                    }
                    span { "Loading..." }
                }
            }

            if let Some(message) = error {
                div {
                    class: "text-red-500 mb-4",
                    "{message}"
                }
            }

            if let Some(user) = profile {
                div {
                    class: "relative max-w-sm w-full rounded-xl overflow-hidden bg-card shadow-2xl drop-shadow-2xl -translate-y-2",

                    ProfileDetails {
                        profile: user,
                        on_appreciate: move |_| appreciation.trigger.call(()),
                    }

                    AppreciationOverlay { visible: appreciation_visible }
                }
            }
        }
    }
}

#[component]
fn ProfileDetails(profile: UserProfile, on_appreciate: EventHandler<()>) -> Element {
    rsx! {
        // Header band with avatar straddling its bottom edge
        div {
            class: "h-32 bg-[#55efc4] relative",
            img {
                class: "w-20 h-20 rounded-full border-4 border-white absolute bottom-0 left-1/2 -translate-x-1/2 translate-y-1/2 object-cover",
                src: "{profile.image}",
                alt: "{profile.name}",
                width: "80",
                height: "80",
            }
        }

        div {
            class: "p-6 pt-12 text-center",

            h3 {
                class: "text-xl font-bold flex items-center justify-center",
                UserIcon { class: "w-5 h-5 mr-2".to_string() }
                "{profile.name}"
            }
            p {
                class: "text-muted-foreground flex items-center justify-center",
                MailIcon { class: "w-5 h-5 mr-2".to_string() }
                "{profile.email}"
            }
            div {
                class: "text-sm text-muted-foreground mt-2 flex items-center justify-center",
                MapPinIcon { class: "w-5 h-5 mr-2".to_string() }
                "{profile.address}"
            }
            div {
                class: "text-sm text-muted-foreground mt-2 flex items-center justify-center",
                InfoIcon { class: "w-5 h-5 mr-2".to_string() }
                "{profile.description}"
            }

            button {
                class: "mt-4 px-4 py-2 border border-border bg-slate-200 rounded-full hover:bg-slate-300 transition inline-flex items-center gap-2",
                onclick: move |_| on_appreciate.call(()),
                HeartIcon {
                    class: "w-4 h-4 text-red-500".to_string(),
                    filled: true
                }
                "Appreciate"
            }
        }
    }
}
