use dioxus::prelude::*;

/// Thank-you overlay laid over the profile card
///
/// Stays mounted with the card and fades by opacity, so hiding animates too.
#[component]
pub fn AppreciationOverlay(visible: bool) -> Element {
    let hidden = !visible;
    let visibility = if visible {
        "opacity-100"
    } else {
        "opacity-0 pointer-events-none"
    };

    rsx! {
        div {
            class: "absolute inset-0 flex items-center justify-center bg-white/75 transition-opacity duration-300 {visibility}",
            role: "status",
            aria_live: "polite",
            aria_hidden: "{hidden}",

            h2 {
                class: "text-2xl font-bold text-black",
                "❤️ Thank you ✨"
            }
        }
    }
}
