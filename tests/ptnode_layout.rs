use ptnode_fields::*;

/// Appends a complete PtNode array with a single node, field by field, the
/// way a node writer lays one out at the tail of the dictionary.
#[test]
fn single_node_array_appended_at_tail() {
    let mut buffer = BufferWithExtendableBuffer::with_defaults(vec![0xAA; 8]);
    let array_pos = buffer.tail_position();
    let mut pos = array_pos;

    write_pt_node_array_size_and_advance(&mut buffer, 1, &mut pos).unwrap();
    let node_pos = pos;
    let flags = NodeFlags::create(false, false, true, false, false, true);
    write_flags_and_advance(&mut buffer, flags, &mut pos).unwrap();
    write_parent_offset_and_advance(&mut buffer, Some(-(node_pos as i64)), &mut pos).unwrap();
    write_code_points_and_advance(&mut buffer, &['o', 'k'], &mut pos).unwrap();
    write_probability_and_advance(&mut buffer, 100, &mut pos).unwrap();
    write_children_position_and_advance(&mut buffer, None, &mut pos).unwrap();
    write_forward_link_position_and_advance(&mut buffer, None, &mut pos).unwrap();

    assert_eq!(pos, buffer.tail_position());
    assert_eq!(
        buffer.get_buffer(true),
        &[
            0x01, // array size
            0xF0, // flags
            0x80, 0x00, 0x09, // parent offset -9
            b'o', b'k', 0x1F, // code points
            100,  // probability
            0x00, 0x00, 0x00, // no children
            0x00, 0x00, 0x00, // no forward link
        ]
    );
    assert_eq!(&buffer.to_bytes()[..8], &[0xAA; 8]);
}

#[test]
fn forward_link_patched_after_next_array_is_appended() {
    let mut buffer = BufferWithExtendableBuffer::empty(BufferConfig::default());
    write_empty_dictionary(&mut buffer, 0).unwrap();
    let forward_link_field_pos = 1;

    let next_array_pos = buffer.tail_position();
    write_empty_dictionary(&mut buffer, next_array_pos).unwrap();

    let mut pos = forward_link_field_pos;
    write_forward_link_position_and_advance(&mut buffer, Some(next_array_pos), &mut pos).unwrap();

    assert_eq!(pos, 4);
    assert_eq!(buffer.tail_position(), 8);
    assert_eq!(buffer.read_uint(3, forward_link_field_pos).unwrap(), 3);
}

#[test]
fn rejected_field_leaves_tail_untouched() {
    let mut buffer = BufferWithExtendableBuffer::empty(BufferConfig::default());
    let mut pos = 0;
    write_probability_and_advance(&mut buffer, 1, &mut pos).unwrap();

    let err = write_probability_and_advance(&mut buffer, 256, &mut pos).unwrap_err();
    assert!(matches!(err, FieldError::RangeViolation { .. }));
    assert_eq!(pos, 1);
    assert_eq!(buffer.tail_position(), 1);

    let err = write_code_points_and_advance(&mut buffer, &[], &mut pos).unwrap_err();
    assert!(matches!(err, FieldError::PreconditionViolation(_)));
    assert_eq!(buffer.tail_position(), 1);
}

#[test]
fn growth_limit_surfaces_as_buffer_error() {
    let config = BufferConfig {
        extend_step: 2,
        max_additional_size: 4,
    };
    let mut buffer = BufferWithExtendableBuffer::empty(config);
    let mut pos = 0;
    write_dict_offset(&mut buffer, 1, &mut pos).unwrap();

    let err = write_dict_offset(&mut buffer, 1, &mut pos).unwrap_err();
    assert_eq!(
        err,
        FieldError::Buffer(BufferError::CapacityExceeded {
            requested: 6,
            max: 4
        })
    );
    assert_eq!(pos, 3);
}
