use crate::components::icons::{ListMusicIcon, MusicIcon, UsersIcon};
use crate::components::ChromelessButton;
use crate::display_types::CatalogTab;
use dioxus::prelude::*;

/// Tab strip for tracks / artists / playlists
#[component]
pub fn CatalogTabBar(active: CatalogTab, on_change: EventHandler<CatalogTab>) -> Element {
    rsx! {
        div {
            class: "inline-flex bg-card border border-primary/30 rounded-md p-1 mb-6",
            role: "tablist",
            for tab in CatalogTab::ALL {
                ChromelessButton {
                    class: Some(tab_class(tab == active).to_string()),
                    aria_label: Some(tab.label().to_string()),
                    onclick: move |_| on_change.call(tab),
                    TabIcon { tab }
                    "{tab.label()}"
                }
            }
        }
    }
}

#[component]
fn TabIcon(tab: CatalogTab) -> Element {
    let class = "w-[18px] h-[18px]";
    match tab {
        CatalogTab::Tracks => rsx! { MusicIcon { class } },
        CatalogTab::Artists => rsx! { UsersIcon { class } },
        CatalogTab::Playlists => rsx! { ListMusicIcon { class } },
    }
}

fn tab_class(is_active: bool) -> &'static str {
    if is_active {
        "inline-flex items-center gap-2 px-3 py-1.5 rounded-sm bg-primary text-primary-foreground"
    } else {
        "inline-flex items-center gap-2 px-3 py-1.5 rounded-sm text-muted-foreground hover:text-foreground"
    }
}
