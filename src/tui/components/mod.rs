// UI components
//
// Each component renders one region of the screen from `App` state.

mod input_box;
mod status_bar;
mod title_bar;
mod toast;
mod todo_list;

pub use input_box::render as render_input_box;
pub use status_bar::render as render_status;
pub use title_bar::render as render_title;
pub use todo_list::render as render_todo_list;
pub use toast::Toast;
