extern crate contain;
#[macro_use]
extern crate quickcheck;

use contain::collections::contiguous::{OutOfCapacity, Vector};

fn vector_of(values: &[i32]) -> Vector<i32> {
    values.iter().copied().collect()
}

quickcheck! {
    // Some(v) pushes v, None pops, checked against std's Vec.
    fn push_pop_tracks_length(ops: Vec<Option<i16>>) -> bool {
        let mut vec = Vector::new();
        let mut model = Vec::new();

        for op in ops {
            match op {
                Some(value) => {
                    vec.push(value);
                    model.push(value);
                },
                None => {
                    if vec.pop() != model.pop() {
                        return false;
                    }
                },
            }
        }

        vec.len() == model.len() && *vec == *model
    }

    fn pop_undoes_push(values: Vec<i32>, value: i32) -> bool {
        let mut vec = vector_of(&values);
        let len = vec.len();

        vec.push(value);
        vec.pop() == Some(value) && vec.len() == len && *vec == *values
    }

    fn failed_push_within_capacity_changes_nothing(values: Vec<i32>, value: i32) -> bool {
        let mut vec = Vector::with_capacity(values.len());
        for &item in &values {
            if vec.push_within_capacity(item).is_err() {
                return false;
            }
        }

        let (len, cap) = (vec.len(), vec.cap());
        vec.push_within_capacity(value) == Err(OutOfCapacity(value))
            && vec.len() == len
            && vec.cap() == cap
            && *vec == *values
    }

    fn growth_preserves_elements(values: Vec<i32>, value: i32) -> bool {
        let mut vec = Vector::with_capacity(values.len());
        vec.extend(values.iter().copied());
        let old_cap = vec.cap();

        vec.push(value);
        vec.cap() > old_cap && vec[..values.len()] == *values && vec.at(values.len()) == &value
    }

    fn append_concatenates(a: Vec<i32>, b: Vec<i32>) -> bool {
        let mut left = vector_of(&a);
        let mut right = vector_of(&b);
        left.append(&mut right);

        let expected: Vec<i32> = a.iter().chain(b.iter()).copied().collect();
        left.len() == a.len() + b.len() && right.is_empty() && *left == *expected
    }

    #[allow(clippy::eq_op)]
    fn equality_is_elementwise(a: Vec<u8>, b: Vec<u8>) -> bool {
        let x: Vector<u8> = a.iter().copied().collect();
        let y: Vector<u8> = b.iter().copied().collect();
        (x == x) && ((x == y) == (y == x)) && ((x == y) == (a == b))
    }

    fn slice_of_offsets_indices(values: Vec<i32>, start: usize, end: usize) -> bool {
        let vec = vector_of(&values);
        let (mut i, mut j) = (start % (values.len() + 1), end % (values.len() + 1));
        if i > j {
            std::mem::swap(&mut i, &mut j);
        }

        let slice = vec.slice_of(i..j);
        slice.len() == j - i && (0..j - i).all(|k| slice.at(k) == vec.at(i + k))
    }
}

#[test]
fn concrete_scenario() {
    let mut vec = Vector::new();
    vec.push(1);
    vec.push(2);
    vec.push(3);
    assert_eq!(vec.len(), 3);
    assert_eq!(vec.pop(), Some(3));
    assert_eq!(vec.len(), 2);
    assert_eq!(&*vec.slice_of(0..2), &[1, 2]);

    let mut full = Vector::with_capacity(2);
    full.push(1);
    full.push(2);
    assert_eq!(full.push_within_capacity(3), Err(OutOfCapacity(3)));
    assert_eq!((full.len(), full.cap()), (2, 2));
}
