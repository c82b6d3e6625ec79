use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Rewrites the stored catalog as currently loaded and says goodbye.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let catalog = store.load()?;
    store.save(&catalog)?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Library saved. Goodbye!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn saves_unchanged_catalog() {
        let mut store = StoreFixture::new().with_books(3).store;
        let before = store.load().unwrap();

        let result = run(&mut store).unwrap();
        assert_eq!(result.messages[0].content, "Library saved. Goodbye!");
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().unwrap(), before);
    }
}
