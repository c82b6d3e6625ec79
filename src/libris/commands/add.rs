use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibrisError, Result};
use crate::model::BookDraft;
use crate::recommend::recommend;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, draft: BookDraft) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !draft.genre.is_empty() {
        result = result.with_recommendations(recommend(&draft.genre));
    }

    if !draft.missing_fields().is_empty() {
        result.add_message(CmdMessage::error("Please fill all fields."));
        return Ok(result);
    }

    let book = match draft.validate() {
        Ok(book) => book,
        Err(LibrisError::Validation(msg)) => {
            result.add_message(CmdMessage::error(msg));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    let mut catalog = store.load()?;
    catalog.push(book.clone());
    store.save(&catalog)?;

    result.add_message(CmdMessage::success(format!(
        "'{}' added successfully!",
        book.title()
    )));
    Ok(result.with_affected_books(vec![book]))
}
