use naval_war::{BitBoard, BitBoardError};

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());

    bb.clear(1, 1).unwrap();
    assert!(!bb.get(1, 1).unwrap());

    bb.set(2, 3).unwrap();
    assert!(bb.get(2, 3).unwrap());
    assert_eq!(bb.count_ones(), 1);
}

#[test]
fn test_out_of_bounds() {
    let mut bb = BitBoard::<u128, 10>::new();
    assert_eq!(
        bb.set(10, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 10, col: 0 }
    );
    assert!(bb.get(0, 10).is_err());
}

#[test]
fn test_from_iter_and_iter() {
    let bb = BitBoard::<u16, 4>::from_iter([(0, 1), (3, 3)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
    assert_eq!(bb.nth_set_bit(1), Some((3, 3)));
    assert_eq!(bb.nth_set_bit(2), None);
}

#[test]
fn test_not_stays_on_board() {
    let bb = BitBoard::<u128, 10>::from_iter([(0, 0), (9, 9)]).unwrap();
    let inverted = !bb;
    assert_eq!(inverted.count_ones(), 98);
    assert!(!inverted.get(9, 9).unwrap());
    assert_eq!(BitBoard::<u128, 10>::full().count_ones(), 100);
}

#[test]
fn test_checkerboard_classes() {
    let even = BitBoard::<u128, 10>::checkerboard(0);
    let odd = BitBoard::<u128, 10>::checkerboard(1);
    assert_eq!(even.count_ones(), 50);
    assert_eq!(odd.count_ones(), 50);
    assert!((even & odd).is_empty());
    assert!(even.iter_set_bits().all(|(r, c)| (r + c) % 2 == 0));
    assert!(even.get(3, 5).unwrap());
    assert!(!even.get(3, 4).unwrap());
}

#[test]
fn test_contains_all() {
    let big = BitBoard::<u16, 4>::from_iter([(0, 0), (0, 1), (0, 2)]).unwrap();
    let small = BitBoard::<u16, 4>::from_iter([(0, 1)]).unwrap();
    assert!(big.contains_all(&small));
    assert!(!small.contains_all(&big));
}
