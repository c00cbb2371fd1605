use gradebook_core::{CourseRecord, Sequence};

#[test]
fn appended_string_is_independent_of_caller_copy() {
    let mut sequence = Sequence::new();
    let mut element = String::from("before");
    sequence.append(&element).expect("append");

    element.clear();
    element.push_str("after");
    drop(element);

    let cursor = sequence.begin().expect("one element");
    assert_eq!(cursor.get(), "before");
    assert!(cursor.advance().is_none());
}

#[test]
fn empty_sequence_has_no_cursor() {
    let sequence: Sequence<CourseRecord> = Sequence::new();
    assert!(sequence.begin().is_none());
    assert_eq!(sequence.len(), 0);
    assert!(sequence.is_empty());
    assert_eq!(sequence.iter().count(), 0);
}

#[test]
fn size_matches_cursor_traversal_count() {
    let mut sequence = Sequence::new();
    for (name, grade) in [("Math", 80), ("Bio", 100), ("Art", 65), ("Math", 10)] {
        let course = CourseRecord::new(name, grade).expect("course");
        sequence.append(&course).expect("append");
    }

    let mut visited = 0;
    let mut grades = Vec::new();
    let mut cursor = sequence.begin();
    while let Some(current) = cursor {
        visited += 1;
        grades.push(current.get().grade());
        cursor = current.advance();
    }

    // Uniqueness is a caller policy; the sequence keeps both "Math" entries.
    assert_eq!(visited, sequence.len());
    assert_eq!(grades, vec![80, 100, 65, 10]);
}

#[test]
fn cursor_yields_stored_element_not_a_copy() {
    let mut sequence = Sequence::new();
    sequence.append(&String::from("x")).expect("append");

    let first = sequence.begin().expect("cursor").get();
    let second = sequence.iter().next().expect("iter");
    assert!(std::ptr::eq(first, second));
}
