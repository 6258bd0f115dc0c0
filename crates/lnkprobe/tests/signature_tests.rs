use lnkprobe::{
    CoreError, SIGNATURE, SIGNATURE_LEN, check_file_signature, check_file_signature_stream,
};
use std::io::{Cursor, Error, ErrorKind, Read, Seek, SeekFrom, Write};
use tempfile::NamedTempFile;

fn lnk_fixture(padding: usize) -> Vec<u8> {
    let mut data = SIGNATURE.to_vec();
    data.resize(SIGNATURE_LEN + padding, 0xCD);
    data
}

fn temp_file_with(data: &[u8]) -> NamedTempFile {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(data).unwrap();
    temp.flush().unwrap();
    temp
}

#[test]
fn test_valid_lnk_file_matches() {
    let temp = temp_file_with(&lnk_fixture(1024));
    assert!(check_file_signature(temp.path()).unwrap());
}

#[test]
fn test_bare_signature_matches() {
    let temp = temp_file_with(&SIGNATURE);
    assert!(check_file_signature(temp.path()).unwrap());
}

#[test]
fn test_four_zero_bytes_do_not_match() {
    let temp = temp_file_with(&[0u8; 4]);
    assert!(!check_file_signature(temp.path()).unwrap());
}

#[test]
fn test_empty_file_is_negative_not_error() {
    let temp = temp_file_with(b"");
    assert!(!check_file_signature(temp.path()).unwrap());
}

#[test]
fn test_truncated_signature_is_negative() {
    let temp = temp_file_with(&SIGNATURE[..SIGNATURE_LEN - 1]);
    assert!(!check_file_signature(temp.path()).unwrap());
}

#[test]
fn test_corrupt_byte_is_negative() {
    let mut data = lnk_fixture(64);
    data[4] ^= 0xFF;
    let temp = temp_file_with(&data);
    assert!(!check_file_signature(temp.path()).unwrap());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = check_file_signature("/nonexistent/ghost.lnk").unwrap_err();
    assert!(matches!(err, CoreError::Io { op: "open", .. }));
}

#[test]
fn test_empty_path_is_unsupported_input() {
    let err = check_file_signature("").unwrap_err();
    assert!(matches!(err, CoreError::UnsupportedInput(_)));
}

#[test]
fn test_stream_check_matches() {
    let mut cursor = Cursor::new(lnk_fixture(512));
    assert!(check_file_signature_stream(&mut cursor).unwrap());
}

#[test]
fn test_stream_check_negative() {
    let mut cursor = Cursor::new(b"not a shortcut at all".to_vec());
    assert!(!check_file_signature_stream(&mut cursor).unwrap());
}

#[test]
fn test_stream_check_empty_is_negative() {
    let mut cursor = Cursor::new(Vec::new());
    assert!(!check_file_signature_stream(&mut cursor).unwrap());
}

#[test]
fn test_path_and_stream_agree() {
    for data in [
        lnk_fixture(0),
        lnk_fixture(2048),
        SIGNATURE[..SIGNATURE_LEN - 1].to_vec(),
        vec![0u8; 4],
        Vec::new(),
        b"arbitrary non-shortcut bytes".to_vec(),
    ] {
        let temp = temp_file_with(&data);
        let via_path = check_file_signature(temp.path()).unwrap();

        let mut cursor = Cursor::new(data);
        let via_stream = check_file_signature_stream(&mut cursor).unwrap();

        assert_eq!(via_path, via_stream);
    }
}

#[test]
fn test_repeated_checks_are_idempotent() {
    let temp = temp_file_with(&lnk_fixture(128));
    for _ in 0..5 {
        assert!(check_file_signature(temp.path()).unwrap());
    }

    let mut cursor = Cursor::new(lnk_fixture(128));
    for _ in 0..5 {
        assert!(check_file_signature_stream(&mut cursor).unwrap());
    }
}

#[test]
fn test_stream_left_open_after_check() {
    let mut cursor = Cursor::new(lnk_fixture(8));
    check_file_signature_stream(&mut cursor).unwrap();

    cursor.seek(SeekFrom::Start(0)).unwrap();
    let mut all = Vec::new();
    cursor.read_to_end(&mut all).unwrap();
    assert_eq!(all.len(), SIGNATURE_LEN + 8);
}

struct SeekAlwaysFails;

impl Read for SeekAlwaysFails {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        panic!("read must not be attempted on a stream that failed its seek probe");
    }
}

impl Seek for SeekAlwaysFails {
    fn seek(&mut self, _pos: SeekFrom) -> std::io::Result<u64> {
        Err(Error::new(ErrorKind::Unsupported, "no seeking here"))
    }
}

#[test]
fn test_unseekable_stream_is_typed_error_before_any_read() {
    let mut stream = SeekAlwaysFails;
    let err = check_file_signature_stream(&mut stream).unwrap_err();
    assert!(matches!(err, CoreError::AdapterInit { .. }));
}

struct ReadAlwaysFails {
    len: u64,
}

impl Read for ReadAlwaysFails {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(Error::other("device reset"))
    }
}

impl Seek for ReadAlwaysFails {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        match pos {
            SeekFrom::Start(offset) => Ok(offset),
            SeekFrom::End(delta) => Ok(self.len.saturating_add_signed(delta)),
            SeekFrom::Current(_) => Ok(0),
        }
    }
}

#[test]
fn test_read_failure_is_io_error() {
    let mut stream = ReadAlwaysFails { len: 4096 };
    let err = check_file_signature_stream(&mut stream).unwrap_err();
    assert!(matches!(err, CoreError::Io { op: "read", .. }));
}

#[test]
fn test_concurrent_checks_on_distinct_inputs() {
    let positive = temp_file_with(&lnk_fixture(256));
    let negative = temp_file_with(b"plain text");

    let positive_path = positive.path().to_path_buf();
    let negative_path = negative.path().to_path_buf();

    let matcher = std::thread::spawn(move || {
        (0..50).all(|_| check_file_signature(&positive_path).unwrap())
    });
    let rejecter = std::thread::spawn(move || {
        (0..50).all(|_| !check_file_signature(&negative_path).unwrap())
    });

    assert!(matcher.join().unwrap());
    assert!(rejecter.join().unwrap());
}
