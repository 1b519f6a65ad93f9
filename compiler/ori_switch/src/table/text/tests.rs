use super::*;
use pretty_assertions::assert_eq;

fn build(labels: &[Option<&str>]) -> TextTable {
    TextTable::build(labels).unwrap()
}

fn raw(table: &TextTable, value: Option<&str>) -> i32 {
    table.resolve(value).raw()
}

#[test]
fn hash_matches_polynomial() {
    assert_eq!(text_hash(""), 0);
    assert_eq!(text_hash("a"), 97);
    assert_eq!(text_hash("ab"), 97 * 31 + 98);
    assert_eq!(text_hash("Aa"), text_hash("BB"));
    assert_eq!(text_hash("Ba"), text_hash("CB"));
}

#[test]
fn hash_uses_utf16_units() {
    // U+1F600 is a surrogate pair: 0xD83D 0xDE00.
    assert_eq!(
        text_hash("\u{1F600}"),
        0xD83D_i32.wrapping_mul(31).wrapping_add(0xDE00)
    );
}

#[test]
fn no_collision_lookup() {
    let table = build(&[Some("apple"), Some("banana"), Some("cherry")]);
    assert!(!table.has_collisions());
    assert_eq!(raw(&table, Some("banana")), 1);
    assert_eq!(raw(&table, Some("apple")), 0);
    assert_eq!(raw(&table, Some("durian")), 3);
}

#[test]
fn case_sensitive_labels() {
    let table = build(&[
        Some("a"),
        Some("b"),
        Some("c"),
        Some("A"),
        Some("B"),
        Some("C"),
    ]);
    for (i, label) in ["a", "b", "c", "A", "B", "C"].iter().enumerate() {
        assert_eq!(raw(&table, Some(label)), i32::try_from(i).unwrap());
    }
    assert_eq!(raw(&table, Some("AA")), 6);
}

#[test]
fn collision_pair_resolves_each_label() {
    let table = build(&[Some("Aa"), Some("BB")]);
    assert!(table.has_collisions());
    assert_eq!(raw(&table, Some("Aa")), 0);
    assert_eq!(raw(&table, Some("BB")), 1);

    let reversed = build(&[Some("BB"), Some("Aa")]);
    assert_eq!(raw(&reversed, Some("Aa")), 1);
    assert_eq!(raw(&reversed, Some("BB")), 0);
}

#[test]
fn colliding_miss_is_no_match() {
    // "D#" shares the hash of "Ba" and "CB" but is neither.
    assert_eq!(text_hash("D#"), text_hash("Ba"));
    let table = build(&[Some("Ba"), Some("CB")]);
    assert_eq!(raw(&table, Some("D#")), 2);
}

#[test]
fn miss_in_bucket_without_collisions_short_circuits() {
    // "BB" hashes like "Aa", but only "Aa" is in the table.
    let table = build(&[Some("Aa"), Some("x")]);
    assert!(!table.has_collisions());
    assert_eq!(raw(&table, Some("BB")), 2);
}

#[test]
fn mixed_collisions_and_null_labels() {
    let labels = [
        Some("Ba"),
        Some("pig"),
        None,
        Some("CB"),
        Some("cow"),
        Some("Ca"),
        Some("horse"),
        Some("DB"),
    ];
    let table = build(&labels);
    for (i, label) in labels.iter().enumerate() {
        if let Some(label) = label {
            assert_eq!(raw(&table, Some(label)), i32::try_from(i).unwrap());
        }
    }
    for missing in ["", "A", "AA", "AAA", "AAAA"] {
        assert_eq!(raw(&table, Some(missing)), 8);
    }
}

#[test]
fn null_label_is_never_matched() {
    let table = build(&[Some("a"), None, Some("c")]);
    assert_eq!(raw(&table, Some("a")), 0);
    assert_eq!(raw(&table, Some("c")), 2);
    // The null label hashes to 0, the same as the empty string.
    assert_eq!(raw(&table, Some("")), 3);
    assert_eq!(raw(&table, None), -1);
}

#[test]
fn empty_label_matches_empty_input() {
    let table = build(&[None, Some("")]);
    assert!(table.has_collisions());
    assert_eq!(raw(&table, Some("")), 1);
}

#[test]
fn repeated_label_picks_first_declared() {
    let table = build(&[Some("x"), Some("y"), Some("x")]);
    assert_eq!(raw(&table, Some("x")), 0);
    assert_eq!(raw(&table, Some("y")), 1);
}

#[test]
fn empty_table() {
    let table = TextTable::build::<&str>(&[]).unwrap();
    assert!(table.is_empty());
    assert_eq!(raw(&table, Some("anything")), 0);
    assert_eq!(raw(&table, None), -1);
}

#[test]
fn owned_labels_build() {
    let labels = vec![Some(String::from("cow")), Some(String::from("pig"))];
    let table = TextTable::build(&labels).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.resolve(Some("pig")).raw(), 1);
}
