use common::model::database::Database;
use common::model::page::Page;

pub enum Msg {
    /// Fetches the schema and then the entries.
    Reload,
    DatabaseLoaded(Result<Database, String>),
    EntriesLoaded(Result<Vec<Page>, String>),
    OpenCreate,
    OpenEdit(Page),
    /// An entry form finished successfully.
    EntrySaved,
    CloseEntryDialogs,
    AskDelete(Page),
    ConfirmDelete,
    Deleted(Result<Page, String>),
    OpenAddPage,
}
