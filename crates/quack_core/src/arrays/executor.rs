use quack_error::Result;

use super::batch::Utf8Column;

/// Sink for function output, indexed by output row.
pub trait OutBuffer {
    fn put(&mut self, idx: usize, value: &str);
    fn put_null(&mut self, idx: usize);
}

/// Handle for writing a single row to an output buffer.
pub struct PutBuffer<'a> {
    idx: usize,
    out: &'a mut dyn OutBuffer,
}

impl<'a> PutBuffer<'a> {
    pub fn new(idx: usize, out: &'a mut dyn OutBuffer) -> Self {
        PutBuffer { idx, out }
    }

    pub fn put(self, value: &str) {
        self.out.put(self.idx, value)
    }
}

/// Output buffer backed by a vec, mostly useful for hosts that copy results
/// out in one go, and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecOutBuffer {
    pub values: Vec<Option<String>>,
}

impl VecOutBuffer {
    pub fn with_len(len: usize) -> Self {
        VecOutBuffer {
            values: vec![None; len],
        }
    }
}

impl OutBuffer for VecOutBuffer {
    fn put(&mut self, idx: usize, value: &str) {
        self.values[idx] = Some(value.to_string());
    }

    fn put_null(&mut self, idx: usize) {
        self.values[idx] = None;
    }
}

#[derive(Debug, Clone)]
pub struct UnaryExecutor;

impl UnaryExecutor {
    /// Execute a unary operation on `array`, placing results in `out`.
    ///
    /// Null inputs produce null outputs without calling `op`.
    pub fn execute<Op>(array: &Utf8Column, out: &mut dyn OutBuffer, mut op: Op) -> Result<()>
    where
        Op: FnMut(&str, PutBuffer),
    {
        for (idx, value) in array.iter().enumerate() {
            match value {
                Some(value) => op(value, PutBuffer::new(idx, out)),
                None => out.put_null(idx),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unary_skips_nulls() {
        let input = Utf8Column::new(vec![Some("a"), None, Some("bc")]);
        let mut out = VecOutBuffer::with_len(3);
        let mut calls = 0;

        UnaryExecutor::execute(&input, &mut out, |v, buf| {
            calls += 1;
            buf.put(&v.to_uppercase())
        })
        .unwrap();

        assert_eq!(2, calls);
        assert_eq!(
            vec![Some("A".to_string()), None, Some("BC".to_string())],
            out.values
        );
    }
}
