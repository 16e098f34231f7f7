use text_size::{TextRange, TextSize};

use crate::Journal;
use crate::parser::Item;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(TextSize::from(start), TextSize::from(end))
}

const CORPUS: [&str; 10] = [
    "",
    "   ",
    "\n\n",
    "2024-06-12 Grocery Store\n  Expenses:Food  $50.23\n  Assets:Checking\n",
    "2024/06/12=2024/06/15 * (101) Acme Corp  ; paid\n  Expenses:Tools  $250\n",
    "alias Foo=Bar=Baz\nappl y\n",
    "comment\nend comment inside\nend comment\n",
    "  leading space\n@@@\n2024-06-13 Ok\n",
    "account Assets\n  note checking\n",
    "2024-06-12 X\n  [Assets:V]  $1\n",
];

#[test]
fn parse_round_trips_every_buffer() {
    for input in CORPUS {
        let journal = Journal::parse(input);
        assert_eq!(journal.render(), input, "round-trip failed for {input:?}");
    }
}

#[test]
fn diagnostics_stay_inside_the_buffer() {
    for input in CORPUS {
        let journal = Journal::parse(input);
        for diag in journal.diagnostics() {
            assert!(
                u32::from(diag.range.end()) as usize <= input.len(),
                "{diag} escapes {input:?}"
            );
        }
    }
}

#[test]
fn sibling_spans_never_overlap() {
    for input in CORPUS {
        let journal = Journal::parse(input);
        let children = &journal.file().children;
        for pair in children.windows(2) {
            assert!(
                pair[1].span().start() >= pair[0].span().end(),
                "overlapping siblings in {input:?}"
            );
        }
        for child in children {
            assert!(child.span().start() <= child.span().end());
        }
    }
}

#[test]
fn first_account_declaration_wins() {
    let input = "2024-06-12 A\n  Assets  $1\n  Expenses\n2024-06-13 B\n  Assets  $2\n";
    let journal = Journal::parse(input);
    assert!(journal.is_valid());
    assert_eq!(journal.accounts().get("Assets"), Some(range(15, 21)));
    assert_eq!(journal.accounts().len(), 2);
}

#[test]
fn payees_are_registered_with_their_first_span() {
    let input = "2024-06-12 Grocery Store\n  Expenses:Food  $50.23\n  Assets:Checking\n";
    let journal = Journal::parse(input);
    assert_eq!(journal.payees().get("Grocery Store"), Some(range(11, 24)));
    assert!(journal.accounts().has("Expenses:Food"));
    assert!(journal.accounts().has("Assets:Checking"));
}

#[test]
fn virtual_accounts_register_their_inner_name() {
    let journal = Journal::parse("2024-06-12 X\n  [Assets:V]  $1\n");
    assert!(journal.accounts().has("Assets:V"));
}

#[test]
fn postings_with_amounts_always_sit_behind_a_hard_space() {
    let hard = Journal::parse("2024-06-12 P\n  Assets  $1\n");
    let Some(Item::Transaction(transaction)) = hard.file().children.first() else {
        panic!("expected a transaction");
    };
    assert!(transaction.postings[0].amount.is_some());

    let soft = Journal::parse("2024-06-12 P\n  Assets $1\n");
    let Some(Item::Transaction(transaction)) = soft.file().children.first() else {
        panic!("expected a transaction");
    };
    assert!(transaction.postings[0].amount.is_none());
}
