use leptos::prelude::*;

use crate::ui::icon::Icon;

/// Tab item definition
#[derive(Clone, PartialEq)]
pub struct TabItem<T> {
    /// Value selected by this tab
    pub id: T,
    /// Display label for the tab
    pub label: String,
    /// Optional icon name
    pub icon: Option<&'static str>,
}

impl<T> TabItem<T> {
    /// Create a new tab item
    pub fn new(id: T, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            icon: None,
        }
    }

    /// Add an icon to the tab
    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Row of tab buttons over a closed set of values
#[component]
pub fn Tabs<T>(
    /// List of tab items
    tabs: Vec<TabItem<T>>,
    /// Currently selected value
    #[prop(into)]
    active: Signal<T>,
    /// Callback when a tab is clicked
    on_change: Callback<T>,
    /// Additional CSS classes for the container
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class=format!("tabs-list {}", class) role="tablist">
            {tabs.into_iter().map(|tab| {
                let id = tab.id;
                let is_active = Signal::derive(move || active.get() == id);

                let tab_class = move || {
                    if is_active.get() { "tab-item tab-active" } else { "tab-item" }
                };

                view! {
                    <button
                        type="button"
                        class=tab_class
                        on:click=move |_| on_change.run(id)
                        role="tab"
                        aria-selected=move || is_active.get().to_string()
                    >
                        {tab.icon.map(|icon| {
                            view! { <Icon name=icon class="tab-icon w-4 h-4" /> }
                        })}
                        <span class="tab-label">{tab.label}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
