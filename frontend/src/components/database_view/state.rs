use common::model::database::Database;
use common::model::page::Page;
use yew::NodeRef;

pub struct DatabaseView {
    /// `None` until the request returns.
    pub database: Option<Result<Database, String>>,
    pub entries: Option<Result<Vec<Page>, String>>,

    /// Entry shown in the edit dialog.
    pub editing: Option<Page>,
    /// Entry waiting for delete confirmation.
    pub pending_delete: Option<Page>,
    pub deleting: bool,

    /// Bumped whenever an entry dialog opens; used as the form's key so each
    /// opening starts from a fresh form.
    pub form_generation: usize,

    pub create_dialog_ref: NodeRef,
    pub edit_dialog_ref: NodeRef,
    pub delete_dialog_ref: NodeRef,
    pub add_page_dialog_ref: NodeRef,
}

impl DatabaseView {
    pub fn new() -> Self {
        Self {
            database: None,
            entries: None,
            editing: None,
            pending_delete: None,
            deleting: false,
            form_generation: 0,
            create_dialog_ref: NodeRef::default(),
            edit_dialog_ref: NodeRef::default(),
            delete_dialog_ref: NodeRef::default(),
            add_page_dialog_ref: NodeRef::default(),
        }
    }

    pub fn loaded_database(&self) -> Option<&Database> {
        self.database.as_ref().and_then(|r| r.as_ref().ok())
    }
}
