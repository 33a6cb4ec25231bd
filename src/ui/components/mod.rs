//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod env_list_component;
pub mod env_viewer_component;
pub mod flyout_component;
pub mod scroll_behavior;
pub mod scrollbar_helper;
pub mod sidebar_component;
pub mod status_bar;
pub mod toast;

pub use dialog_component::DialogComponent;
pub use env_list_component::{EnvListComponent, EnvListStatus};
pub use env_viewer_component::EnvViewerComponent;
pub use flyout_component::{FlyoutComponent, FlyoutView};
pub use scrollbar_helper::ScrollbarHelper;
pub use sidebar_component::SidebarComponent;
pub use status_bar::StatusBar;
pub use toast::ToastManager;
