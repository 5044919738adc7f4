pub mod center;
pub mod global_context;
pub mod left;
pub mod modal_service;
pub mod toast_service;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

pub use modal_service::Modal;

/// Main application shell for signed-in users.
///
/// ```text
/// +-------------------------------+
/// |          TopHeader            |
/// +-------------------------------+
/// |  Sidebar  |      Content      |
/// |   (Left)  |     (Center)      |
/// +-------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                // Left sidebar - uses ctx.left_open for visibility
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>
        </div>
    }
}
