use skiff::{copy_to_stack, round_trip, BufferError, ByteCursor, HeapRegion, PAYLOAD, REGION_LEN};

use proptest::prelude::*;

#[test]
fn successful_run_yields_payload_then_zero_padding() {
    let stack = round_trip().unwrap();
    assert_eq!(stack.len(), REGION_LEN);
    assert_eq!(&stack[..PAYLOAD.len()], PAYLOAD);
    assert!(stack[PAYLOAD.len()..].iter().all(|&b| b == 0));
}

#[test]
fn region_is_all_zero_after_acquisition_and_after_zeroing() {
    let mut region = HeapRegion::acquire(REGION_LEN).unwrap();
    assert_eq!(region.as_bytes(), &[0u8; REGION_LEN]);

    region.write_payload(PAYLOAD);
    region.zero();
    assert_eq!(region.as_bytes(), &[0u8; REGION_LEN]);
}

#[test]
fn stack_copy_equals_region_byte_for_byte() {
    let mut region = HeapRegion::acquire(REGION_LEN).unwrap();
    region.write_payload(PAYLOAD);
    let stack = copy_to_stack(&region);
    assert_eq!(&stack[..], region.as_bytes());
}

#[test]
fn copy_includes_bytes_past_the_terminator() {
    let stack = round_trip().unwrap();
    // The terminator sits at PAYLOAD.len() - 1; everything after it
    // must have been copied too, and must be zero.
    for &b in &stack[PAYLOAD.len()..] {
        assert_eq!(b, 0);
    }
}

#[test]
fn simulated_allocation_failure_reports_once_and_runs_nothing_else() {
    // An impossibly large request makes try_reserve_exact fail
    // deterministically without exhausting memory.
    let requested = usize::MAX >> 1;
    let err = HeapRegion::acquire(requested).unwrap_err();
    assert_eq!(err, BufferError::AllocationFailed { requested });
    assert_eq!(
        err.to_string(),
        format!("buffer allocation failed: requested {requested} bytes")
    );
    // No region exists, so none of zero / write / copy can run.
}

#[test]
fn release_consumes_the_region_exactly_once() {
    let region = HeapRegion::acquire(REGION_LEN).unwrap();
    region.release();
    // `region` is moved out: a second release or any further use is a
    // compile error, so no double-release or dangling path exists.
}

#[test]
fn cursor_reads_the_full_fixed_width() {
    let mut region = HeapRegion::acquire(REGION_LEN).unwrap();
    region.write_payload(PAYLOAD);
    let mut cursor = ByteCursor::new(region.as_bytes());
    let mut count = 0;
    while cursor.next().is_some() {
        count += 1;
    }
    assert_eq!(count, REGION_LEN);
    assert_eq!(cursor.position(), REGION_LEN);
    assert_eq!(cursor.remaining(), 0);
}

proptest! {
    #[test]
    fn acquired_regions_are_always_zero_filled(len in 0usize..4096) {
        let region = HeapRegion::acquire(len).unwrap();
        prop_assert_eq!(region.len(), len);
        prop_assert!(region.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn stack_copy_round_trips_for_any_payload(
        payload in proptest::collection::vec(any::<u8>(), 0..=REGION_LEN),
    ) {
        let mut region = HeapRegion::acquire(REGION_LEN).unwrap();
        region.write_payload(&payload);
        let stack = copy_to_stack(&region);
        prop_assert_eq!(&stack[..], region.as_bytes());
        prop_assert_eq!(&stack[..payload.len()], &payload[..]);
    }

    #[test]
    fn cursor_position_always_equals_bytes_read(
        bytes in proptest::collection::vec(any::<u8>(), 0..128),
        reads in 0usize..200,
    ) {
        let mut cursor = ByteCursor::new(&bytes);
        let mut read = 0;
        for _ in 0..reads {
            if cursor.next().is_some() {
                read += 1;
            }
        }
        prop_assert_eq!(cursor.position(), read);
        prop_assert_eq!(cursor.position(), reads.min(bytes.len()));
        prop_assert_eq!(cursor.remaining(), bytes.len() - cursor.position());
    }
}
