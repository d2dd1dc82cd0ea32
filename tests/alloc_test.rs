use keystone::alloc::{
    allocate, allocate_align, free, free_align, get_allocation_size, get_unaligned_pointer,
    is_pointer_aligned, reallocate_align, AlignedBuffer, AllocError, ALIGNED_HEADER_SIZE,
};

#[test]
fn test_allocate_returns_none_only_on_failure() {
    // Success must be non-null, failure must be `None`; never the other way round.
    let block = allocate(128);
    assert!(block.is_some());
    unsafe { free(block) };

    assert!(allocate(usize::MAX).is_none());
    assert!(allocate(0).is_none());
}

#[test]
fn test_aligned_allocation_recovers_header() {
    for alignment in [1usize, 2, 4, 8, 16, 32, 64, 128, 256, 4096] {
        for size in [1usize, 7, 64, 1000] {
            let block = allocate_align(size, alignment).expect("allocation");
            assert!(is_pointer_aligned(block.as_ptr(), alignment));
            unsafe {
                let base = get_unaligned_pointer(block);
                let offset = block.as_ptr() as usize - base.as_ptr() as usize;
                assert!(offset >= ALIGNED_HEADER_SIZE);
                assert!(offset < ALIGNED_HEADER_SIZE + alignment.max(keystone::alloc::MIN_ALIGNMENT));
                assert_eq!(get_allocation_size(block), size);
                free_align(Some(block));
            }
        }
    }
}

#[test]
fn test_reallocate_align_contract() {
    unsafe {
        let block = allocate_align(48, 16);
        assert!(block.is_some());

        // Same size: no-op fast path.
        assert_eq!(reallocate_align(block, 48, 16), block);

        // Size zero: frees and returns None.
        assert_eq!(reallocate_align(block, 0, 16), None);
    }
}

#[test]
fn test_aligned_buffer_lifecycle() {
    let mut buffer = AlignedBuffer::new(64, 64).expect("buffer");
    buffer[..4].copy_from_slice(&[1, 2, 3, 4]);
    buffer.resize(4096).expect("grow");
    assert_eq!(&buffer[..4], &[1, 2, 3, 4]);
    assert!(buffer[4..].iter().all(|&b| b == 0));
    assert!(is_pointer_aligned(buffer.as_ptr(), 64));
    assert_eq!(buffer.alignment(), 64);
}

#[test]
fn test_aligned_buffer_errors() {
    assert_eq!(AlignedBuffer::new(16, 3).unwrap_err(), AllocError::InvalidLayout);
    let error = AlignedBuffer::new(usize::MAX / 2, 16).unwrap_err();
    assert!(matches!(error, AllocError::OutOfMemory { alignment: 16, .. }));
}

#[test]
fn test_aligned_buffer_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AlignedBuffer>();

    let buffer = AlignedBuffer::from_slice(b"shared", 8).unwrap();
    std::thread::scope(|s| {
        s.spawn(|| assert_eq!(&buffer[..], b"shared"));
    });
}
