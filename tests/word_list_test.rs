//! File-backed word lists and dictionary selection.

use std::io::Write;

use ghost::games::ghost::ScriptedInput;
use ghost::{
    DictionaryTable, EventLog, FileWordList, GameSettings, GhostError, GhostEvent, GhostGame, Player, PlayerId,
    WordListProvider,
};
use tempfile::NamedTempFile;

fn word_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_trimmed_lowercased_words_of_min_length() {
    let file = word_file("Ghost\n  GHOSTLY  \nboo\nAble\n\n");
    let provider = FileWordList::new(DictionaryTable::new().with_entry("scrabble", file.path()));

    let dictionary = provider.load("scrabble", 4).unwrap();
    assert_eq!(dictionary.len(), 3);
    assert!(dictionary.contains("ghost"));
    assert!(dictionary.contains("ghostly"));
    assert!(dictionary.contains("able"));
    assert!(!dictionary.contains("boo"));

    let short = provider.load("scrabble", 3).unwrap();
    assert!(short.contains("boo"));
}

#[test]
fn unknown_dictionary_name_is_rejected() {
    let file = word_file("ghost\n");
    let provider = FileWordList::new(DictionaryTable::new().with_entry("scrabble", file.path()));

    match provider.load("webster", 4) {
        Err(GhostError::UnknownDictionary { name, known }) => {
            assert_eq!(name, "webster");
            assert_eq!(known, vec!["scrabble"]);
        }
        other => panic!("expected UnknownDictionary, got {:?}", other),
    }
}

#[test]
fn missing_file_reports_dictionary_name() {
    let provider = FileWordList::new(DictionaryTable::new().with_entry("webster", "/no/such/webster.txt"));
    match provider.load("webster", 4) {
        Err(GhostError::WordListIo { name, .. }) => assert_eq!(name, "webster"),
        other => panic!("expected WordListIo, got {:?}", other),
    }
}

#[test]
fn game_uses_selected_dictionary_and_min_length() {
    let scrabble = word_file("ghost\n");
    let webster = word_file("spook\nboo\n");
    let table = DictionaryTable::new()
        .with_entry("scrabble", scrabble.path())
        .with_entry("webster", webster.path());
    let settings = GameSettings {
        dictionary: "webster".into(),
        min_word_length: 3,
        dictionaries: table.clone(),
        ..GameSettings::default()
    };
    settings.validate().unwrap();

    let players = (0..2)
        .map(|i| Player::human(PlayerId::new(i), None, Box::new(ScriptedInput::default())))
        .collect();
    let renderer = Box::new(EventLog::<GhostEvent>::new());
    let game = GhostGame::new(players, &settings, &FileWordList::new(table), renderer).unwrap();

    assert_eq!(game.min_word_length(), 3);
    assert!(game.is_valid_word("spook"));
    assert!(game.is_valid_word("boo"));
    assert!(!game.is_valid_word("ghost"));
}
