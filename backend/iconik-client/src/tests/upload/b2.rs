use crate::config::{B2_MAX_PART_SIZE, B2_MIN_PART_SIZE};
use crate::error::UploadError;
use crate::upload::b2::{B2Transfer, PartRange, encode_file_name, plan_parts, sha1_hex};

use std::time::Duration;

/// **VALUE**: Verifies the multipart split: 1-based part numbers, contiguous offsets,
/// and a short final part.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one that drops the tail of the file
/// or sends an empty trailing part, both of which B2 rejects at finish time.
#[test]
fn given_size_not_multiple_of_part_size_when_planning_then_last_part_is_short() {
    // GIVEN/WHEN: 25 bytes in parts of 10
    let parts = plan_parts(25, 10);

    // THEN: Three parts covering every byte exactly once
    assert_eq!(
        parts,
        vec![
            PartRange { number: 1, offset: 0, len: 10 },
            PartRange { number: 2, offset: 10, len: 10 },
            PartRange { number: 3, offset: 20, len: 5 },
        ]
    );
    assert_eq!(parts.iter().map(|p| p.len).sum::<u64>(), 25);
}

#[test]
fn given_exact_multiple_when_planning_then_no_empty_trailing_part() {
    let parts = plan_parts(20, 10);

    assert_eq!(parts.len(), 2);
    assert_eq!(parts[1], PartRange { number: 2, offset: 10, len: 10 });
}

#[test]
fn given_empty_file_when_planning_then_no_parts() {
    assert!(plan_parts(0, 10).is_empty());
}

#[test]
fn given_zero_part_size_when_planning_then_no_parts() {
    assert!(plan_parts(100, 0).is_empty());
}

#[test]
fn given_known_bytes_when_hashed_then_matches_reference_sha1() {
    assert_eq!(sha1_hex(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
}

/// **VALUE**: Verifies `X-Bz-File-Name` encoding keeps directory separators and
/// escapes spaces and non-ASCII characters.
#[test]
fn given_file_name_with_spaces_and_unicode_when_encoded_then_percent_escapes() {
    assert_eq!(
        encode_file_name("lectures/week 1/café.mp4"),
        "lectures/week%201/caf%C3%A9.mp4"
    );
    assert_eq!(encode_file_name("a-b_c.d~e"), "a-b_c.d~e");
}

/// **VALUE**: Verifies a transfer cannot be built with a part size B2 would refuse.
///
/// **BUG THIS CATCHES**: A zero part size plans no parts, so the multipart finish
/// call would go out with an empty digest list and the upload would never complete.
#[test]
fn given_part_size_outside_b2_limits_when_transfer_created_then_returns_invalid_part_size() {
    for part_size in [0, 1024, B2_MIN_PART_SIZE - 1, B2_MAX_PART_SIZE + 1] {
        // WHEN: Building the transfer
        let result = B2Transfer::new(part_size, Duration::from_secs(1));

        // THEN: The size is rejected
        assert!(
            matches!(result, Err(UploadError::InvalidPartSize { part_size: rejected, .. }) if rejected == part_size),
            "part size {part_size} should be rejected"
        );
    }
}

#[test]
fn given_minimum_part_size_when_transfer_created_then_succeeds() {
    assert!(B2Transfer::new(B2_MIN_PART_SIZE, Duration::from_secs(1)).is_ok());
}
