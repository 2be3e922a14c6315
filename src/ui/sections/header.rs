use leptos::prelude::*;

use super::{LogoTile, Wordmark};
use crate::core::NavTarget;
use crate::core::motion::{HEADER_DROP, MENU_COLLAPSE};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{Collapse, motion_style, use_mount_reveal};
use crate::ui::scroll::use_scroll_sample;

/// Fixed header: compact glass style once the page is scrolled, collapsible
/// menu on small screens
#[component]
pub fn Header() -> impl IntoView {
    let scroll = use_scroll_sample();
    let scrolled = Memo::new(move |_| scroll.get().is_scrolled());
    let (menu_open, set_menu_open) = signal(false);

    let mounted = use_mount_reveal();
    let drop_in = motion_style(HEADER_DROP, mounted, 0.0);

    let bar_class = move || {
        if scrolled.get() {
            "header-bar glass py-3"
        } else {
            "header-bar py-5"
        }
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50" style=drop_in>
            <div class=bar_class data-scrolled=move || scrolled.get().to_string()>
                <div class="max-w-7xl mx-auto px-6 flex items-center justify-between">
                    // Logo
                    <a href="/" class="flex items-center gap-3 hover-lift">
                        <LogoTile glow=true />
                        <div class="hidden sm:block">
                            <Wordmark />
                        </div>
                    </a>

                    // Desktop Navigation
                    <nav class="hidden md:flex items-center gap-4">
                        <a
                            href=NavTarget::HowItWorks.href()
                            class="text-zinc-400 hover:text-white transition-colors text-sm px-4 py-2 animated-underline"
                        >
                            "How It Works"
                        </a>
                        <a
                            href=NavTarget::BookCall.href()
                            class="btn-primary px-5 py-2.5 rounded-lg text-sm font-medium"
                        >
                            "Book a Call"
                        </a>
                    </nav>

                    // Mobile menu button
                    <button
                        type="button"
                        class="md:hidden p-2 press"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                    >
                        {move || {
                            if menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            // Mobile menu
            <div class="md:hidden mx-4">
                <Collapse open=menu_open motion=MENU_COLLAPSE class="glass mt-2 rounded-xl">
                    <nav class="p-4 flex flex-col gap-3">
                        <a
                            href=NavTarget::HowItWorks.href()
                            class="text-zinc-400 hover:text-white py-2"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            "How It Works"
                        </a>
                        <a
                            href=NavTarget::BookCall.href()
                            class="btn-primary px-5 py-2.5 rounded-lg text-sm font-medium text-center"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            "Book a Call"
                        </a>
                    </nav>
                </Collapse>
            </div>
        </header>
    }
}
