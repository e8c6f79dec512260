use super::*;

#[test]
fn snapshots_come_back_in_reverse_order() {
    let mut history = History::new();
    let empty = Board::empty();
    let start = Board::startpos();

    history.push(empty.clone());
    history.push(start.clone());

    assert_eq!(history.len(), 2);
    assert_eq!(history.pop(), start);
    assert_eq!(history.pop(), empty);
    assert!(history.is_empty());
}

#[test]
fn peek_does_not_consume() {
    let mut history = History::new();
    history.push(Board::startpos());

    assert_eq!(history.peek(), &Board::startpos());
    assert_eq!(history.len(), 1);
}

#[test]
fn clear_empties_the_stack() {
    let mut history = History::new();
    history.push(Board::empty());
    history.push(Board::empty());

    history.clear();

    assert!(history.is_empty());
    assert_eq!(history.len(), 0);
}

#[test]
#[should_panic(expected = "pop on empty history")]
fn popping_an_empty_stack_is_a_caller_bug() {
    History::new().pop();
}

#[test]
#[should_panic(expected = "peek on empty history")]
fn peeking_an_empty_stack_is_a_caller_bug() {
    History::new().peek();
}
