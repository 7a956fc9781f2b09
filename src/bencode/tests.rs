use std::collections::BTreeMap;

use super::*;

#[test]
fn test_decode_integer() {
    assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
    assert_eq!(decode(b"i-42e").unwrap(), Value::Integer(-42));
    assert_eq!(decode(b"i0e").unwrap(), Value::Integer(0));
}

#[test]
fn test_decode_integer_invalid() {
    assert!(decode(b"i-0e").is_err());
    assert!(decode(b"i03e").is_err());
    assert!(decode(b"ie").is_err());
    assert!(decode(b"i12").is_err());
}

#[test]
fn test_decode_bytes() {
    assert_eq!(decode(b"4:spam").unwrap(), Value::string("spam"));
    assert_eq!(decode(b"0:").unwrap(), Value::Bytes(Vec::new()));
}

#[test]
fn test_decode_bytes_length_past_end() {
    assert_eq!(decode(b"10:spam"), Err(BencodeError::UnexpectedEof));
    assert_eq!(decode(b"x:spam"), Err(BencodeError::UnexpectedChar('x')));
}

#[test]
fn test_decode_list() {
    let value = decode(b"l4:spami42ee").unwrap();
    let list = value.as_list().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].as_str(), Some("spam"));
    assert_eq!(list[1].as_integer(), Some(42));
}

#[test]
fn test_decode_dict() {
    let value = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
    assert_eq!(value.as_dict().map(|d| d.len()), Some(2));
    assert_eq!(value.get(b"cow").and_then(Value::as_str), Some("moo"));
    assert_eq!(value.get(b"missing"), None);
}

#[test]
fn test_decode_dict_non_string_key() {
    assert_eq!(decode(b"di1e3:fooe"), Err(BencodeError::UnexpectedChar('i')));
}

#[test]
fn test_decode_unterminated() {
    assert_eq!(decode(b"l4:spam"), Err(BencodeError::UnexpectedEof));
    assert_eq!(decode(b"d3:foo"), Err(BencodeError::UnexpectedEof));
    assert_eq!(decode(b""), Err(BencodeError::UnexpectedEof));
}

#[test]
fn test_decode_trailing_data() {
    assert_eq!(decode(b"i1ei2e"), Err(BencodeError::TrailingData));
}

#[test]
fn test_decode_nesting_limit() {
    let mut data = vec![b'l'; 100];
    data.extend(vec![b'e'; 100]);
    assert_eq!(decode(&data), Err(BencodeError::NestingTooDeep));
}

#[test]
fn test_decode_nesting_at_limit() {
    let nested = |depth: usize| {
        let mut data = vec![b'l'; depth];
        data.extend(vec![b'e'; depth]);
        data
    };
    assert!(decode(&nested(64)).is_ok());
    assert_eq!(decode(&nested(65)), Err(BencodeError::NestingTooDeep));
}

#[test]
fn test_decode_integer_sign_only() {
    assert!(decode(b"i-e").is_err());
    assert!(decode(b"i--1e").is_err());
    assert_eq!(
        decode(b"i9223372036854775807e").unwrap(),
        Value::Integer(i64::MAX)
    );
    assert!(decode(b"i9223372036854775808e").is_err());
}

#[test]
fn test_decode_string_length_without_colon() {
    assert_eq!(decode(b"4spam"), Err(BencodeError::UnexpectedEof));
    assert_eq!(decode(b"4x:spam"), Err(BencodeError::InvalidStringLength));
}

#[test]
fn test_encode_sorts_keys() {
    let mut dict = BTreeMap::new();
    dict.insert(b"b".to_vec(), Value::Integer(2));
    dict.insert(b"a".to_vec(), Value::string("x"));
    assert_eq!(encode(&Value::Dict(dict)), b"d1:a1:x1:bi2ee");
}

#[test]
fn test_decode_accepts_encoded_torrent_shape() {
    let mut info = BTreeMap::new();
    info.insert(b"name".to_vec(), Value::string("ubuntu.iso"));
    info.insert(b"length".to_vec(), Value::Integer(1_610_612_736));
    let mut root = BTreeMap::new();
    root.insert(b"info".to_vec(), Value::Dict(info));

    let value = decode(&encode(&Value::Dict(root))).unwrap();
    let info = value.get(b"info").unwrap();
    assert_eq!(info.get(b"name").and_then(Value::as_str), Some("ubuntu.iso"));
    assert_eq!(info.get(b"length").and_then(Value::as_integer), Some(1_610_612_736));
}
