use super::*;

#[test]
fn test_heap_deref() {
    let h: Heap<str> = Heap::from("abc");
    assert_eq!(h.len(), 3);
    assert!(h.starts_with('a'));
}

#[test]
fn test_heap_clone_shares_allocation() {
    let h1: Heap<str> = Heap::from("hello");
    let h2 = h1.clone();
    assert!(Heap::ptr_eq(&h1, &h2));
    assert_eq!(&*h2, "hello");
}

#[test]
fn test_heap_eq_is_structural() {
    let h1: Heap<str> = Heap::from(String::from("hello"));
    let h2: Heap<str> = Heap::from("hello");
    let h3: Heap<str> = Heap::from("world");
    assert_eq!(h1, h2);
    assert!(!Heap::ptr_eq(&h1, &h2));
    assert_ne!(h1, h3);
}

#[test]
fn test_heap_slice() {
    let h: Heap<[u32]> = Heap::from(vec![1, 2, 3]);
    assert_eq!(h.len(), 3);
    let from_slice: Heap<[u32]> = Heap::from(&[1u32, 2, 3][..]);
    assert_eq!(h, from_slice);
}

#[test]
fn test_heap_debug_is_transparent() {
    let h: Heap<str> = Heap::from("x");
    assert_eq!(format!("{h:?}"), "\"x\"");
}
