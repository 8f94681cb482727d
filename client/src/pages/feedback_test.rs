use super::*;

#[test]
fn prepare_answers_trims_and_keeps_positions() {
    let answers = vec!["  slow  ".to_owned(), String::new(), "nice".to_owned()];
    assert_eq!(
        prepare_answers(&answers),
        Ok(vec!["slow".to_owned(), String::new(), "nice".to_owned()])
    );
}

#[test]
fn prepare_answers_rejects_all_blank() {
    let answers = vec!["   ".to_owned(), String::new()];
    assert_eq!(prepare_answers(&answers), Err("Answer at least one question before sending."));
}

#[test]
fn prepare_answers_rejects_empty_list() {
    assert!(prepare_answers(&[]).is_err());
}
