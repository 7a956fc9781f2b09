use std::collections::BTreeMap;

use super::error::BencodeError;
use super::value::Value;

/// Containers nested deeper than this are rejected rather than recursed into.
const MAX_DEPTH: usize = 64;

/// Decodes a single bencode value spanning all of `data`.
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    let mut decoder = Decoder::new(data);
    let value = decoder.value()?;

    if !decoder.is_done() {
        return Err(BencodeError::TrailingData);
    }

    Ok(value)
}

/// A cursor over the input. Every read advances `pos` past what it consumed.
struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    depth: usize,
}

impl<'a> Decoder<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            depth: 0,
        }
    }

    fn is_done(&self) -> bool {
        self.pos == self.data.len()
    }

    fn peek(&self) -> Result<u8, BencodeError> {
        self.data
            .get(self.pos)
            .copied()
            .ok_or(BencodeError::UnexpectedEof)
    }

    /// Consume bytes up to `delim` and step over it, returning what came before.
    fn take_until(&mut self, delim: u8) -> Result<&'a [u8], BencodeError> {
        let data = self.data;
        let rest = &data[self.pos..];
        let end = rest
            .iter()
            .position(|&b| b == delim)
            .ok_or(BencodeError::UnexpectedEof)?;
        self.pos += end + 1;
        Ok(&rest[..end])
    }

    fn value(&mut self) -> Result<Value, BencodeError> {
        match self.peek()? {
            b'i' => self.integer(),
            b'l' => self.nested(Self::list),
            b'd' => self.nested(Self::dict),
            b'0'..=b'9' => self.byte_string().map(|s| Value::Bytes(s.to_vec())),
            c => Err(BencodeError::UnexpectedChar(c as char)),
        }
    }

    fn nested(
        &mut self,
        container: fn(&mut Self) -> Result<Value, BencodeError>,
    ) -> Result<Value, BencodeError> {
        if self.depth == MAX_DEPTH {
            return Err(BencodeError::NestingTooDeep);
        }
        self.depth += 1;
        let value = container(self);
        self.depth -= 1;
        value
    }

    fn integer(&mut self) -> Result<Value, BencodeError> {
        self.pos += 1;
        let digits = self.take_until(b'e')?;

        let text = std::str::from_utf8(digits)
            .map_err(|_| BencodeError::InvalidInteger("invalid utf8".into()))?;

        let canonical = match text.strip_prefix('-') {
            Some(magnitude) => !magnitude.is_empty() && !magnitude.starts_with('0'),
            None => text == "0" || (!text.is_empty() && !text.starts_with('0')),
        };
        if !canonical {
            let reason = if text.is_empty() { "empty" } else { "leading zeros" };
            return Err(BencodeError::InvalidInteger(reason.into()));
        }

        text.parse()
            .map(Value::Integer)
            .map_err(|_| BencodeError::InvalidInteger(text.into()))
    }

    fn byte_string(&mut self) -> Result<&'a [u8], BencodeError> {
        let len: usize = std::str::from_utf8(self.take_until(b':')?)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or(BencodeError::InvalidStringLength)?;

        let bytes = self
            .data
            .get(self.pos..)
            .and_then(|rest| rest.get(..len))
            .ok_or(BencodeError::UnexpectedEof)?;
        self.pos += len;
        Ok(bytes)
    }

    /// Run `item` until the closing `e` of the container opened at `pos`.
    fn until_end(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<(), BencodeError>,
    ) -> Result<(), BencodeError> {
        self.pos += 1;
        while self.peek()? != b'e' {
            item(self)?;
        }
        self.pos += 1;
        Ok(())
    }

    fn list(&mut self) -> Result<Value, BencodeError> {
        let mut list = Vec::new();
        self.until_end(|d| {
            list.push(d.value()?);
            Ok(())
        })?;
        Ok(Value::List(list))
    }

    fn dict(&mut self) -> Result<Value, BencodeError> {
        let mut dict = BTreeMap::new();
        self.until_end(|d| {
            match d.peek()? {
                b'0'..=b'9' => {}
                c => return Err(BencodeError::UnexpectedChar(c as char)),
            }
            let key = d.byte_string()?.to_vec();
            let value = d.value()?;
            dict.insert(key, value);
            Ok(())
        })?;
        Ok(Value::Dict(dict))
    }
}
