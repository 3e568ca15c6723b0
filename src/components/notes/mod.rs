mod loading_overlay;
mod note_form;
mod note_list;
mod pagination;
mod search_box;
mod toaster;

pub use loading_overlay::LoadingOverlay;
pub use note_form::NoteFormView;
pub use note_list::NoteList;
pub use pagination::Pagination;
pub use search_box::SearchBox;
pub use toaster::Toaster;
