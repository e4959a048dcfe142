/// Integration tests running the anagram payload through the in-memory driver.

extern crate anagram_finder;

use anagram_finder::*;

fn single_chunk(text: &str) -> Vec<MapInputKV> {
    vec![MapInputKV::new("chunk0".to_owned(), text.to_owned())]
}

#[test]
fn groups_anagram_quartet() {
    let results = run_local(
        &AnagramMapper,
        &AnagramReducer::default(),
        single_chunk("Stop spot pots tops"),
    ).unwrap();

    assert_eq!(vec!["stop,spot,pots,tops".to_owned()], results);
}

#[test]
fn emits_nothing_for_singleton_groups() {
    let results = run_local(
        &AnagramMapper,
        &AnagramReducer::default(),
        single_chunk("cat dog"),
    ).unwrap();

    assert!(results.is_empty());
}

#[test]
fn groups_mixed_case_words_in_first_seen_order() {
    let results = run_local(
        &AnagramMapper,
        &AnagramReducer::default(),
        single_chunk("Listen Silent enlist"),
    ).unwrap();

    assert_eq!(vec!["listen,silent,enlist".to_owned()], results);
}

#[test]
fn deduplicates_words_before_filtering() {
    let results = run_local(
        &AnagramMapper,
        &AnagramReducer::default(),
        single_chunk("Dog, GOD! dog"),
    ).unwrap();

    assert_eq!(vec!["dog,god".to_owned()], results);
}

#[test]
fn groups_span_input_chunks() {
    // The group filter is a barrier: "silent" arriving in a later chunk still joins the group.
    let inputs = vec![
        MapInputKV::new("chunk0".to_owned(), "listen enlist".to_owned()),
        MapInputKV::new("chunk1".to_owned(), "silent".to_owned()),
    ];

    let results = run_local(&AnagramMapper, &AnagramReducer::default(), inputs).unwrap();

    assert_eq!(vec!["listen,enlist,silent".to_owned()], results);
}

#[test]
fn mixed_input_produces_one_record_per_retained_group() {
    let text = "Stop spot pots tops\ncat dog\nListen Silent enlist";

    let results = run_local(
        &AnagramMapper,
        &AnagramReducer::default(),
        single_chunk(text),
    ).unwrap();

    assert_eq!(
        vec![
            "stop,spot,pots,tops".to_owned(),
            "listen,silent,enlist".to_owned(),
        ],
        results
    );
}

#[test]
fn renders_with_configured_options() {
    let options = RenderOptions {
        delimiter: ",".to_owned(),
        wrap_as_array: true,
    };

    let results = run_local(
        &AnagramMapper,
        &AnagramReducer::new(options),
        single_chunk("Dog, GOD! dog"),
    ).unwrap();

    assert_eq!(vec!["[dog,god]".to_owned()], results);
}
