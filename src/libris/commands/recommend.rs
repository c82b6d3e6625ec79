use crate::commands::{CmdMessage, CmdResult};
use crate::recommend::{known_genres, recommend, NO_RECOMMENDATIONS};

pub fn run(genre: &str) -> CmdResult {
    let titles = recommend(genre);
    let result = CmdResult::default().with_recommendations(titles);
    if titles == [NO_RECOMMENDATIONS] {
        let genres: Vec<&str> = known_genres().collect();
        return result.with_message(CmdMessage::info(format!(
            "Known genres: {}",
            genres.join(", ")
        )));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_titles_for_known_genre() {
        let result = run("Science Fiction");
        assert_eq!(
            result.recommendations,
            vec!["Dune", "Ender's Game", "The Martian"]
        );
    }

    #[test]
    fn unknown_genre_returns_sentinel() {
        let result = run("Horror");
        assert_eq!(result.recommendations, vec![NO_RECOMMENDATIONS]);
        assert_eq!(
            result.messages[0].content,
            "Known genres: Fiction, Non-Fiction, Fantasy, Mystery, Science Fiction"
        );
    }

    #[test]
    fn known_genre_has_no_hint() {
        assert!(run("Fantasy").messages.is_empty());
    }
}
