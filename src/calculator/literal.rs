use crate::error::EvalError;

/// Accumulates the characters of the number literal currently being scanned.
#[derive(Debug, Clone)]
pub struct LiteralBuffer {
    text: String,
    capacity: usize,
}

impl LiteralBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, c: char) -> Result<(), EvalError> {
        if self.text.chars().count() >= self.capacity {
            return Err(EvalError::LiteralTooLong {
                limit: self.capacity,
            });
        }
        self.text.push(c);
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Parses the buffered text. `None` for an empty buffer.
    pub fn parse(&self) -> Option<Result<f64, EvalError>> {
        if self.text.is_empty() {
            return None;
        }
        Some(
            self.text
                .parse::<f64>()
                .map_err(|_| EvalError::MalformedLiteral(self.text.clone())),
        )
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let mut buffer = LiteralBuffer::with_capacity(8);
        assert!(buffer.parse().is_none());

        for c in "4.5".chars() {
            buffer.push(c).unwrap();
        }
        assert_eq!(buffer.parse(), Some(Ok(4.5)));

        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.parse().is_none());
    }

    #[test]
    fn test_trailing_and_leading_point() {
        let mut buffer = LiteralBuffer::with_capacity(8);
        for c in "2.".chars() {
            buffer.push(c).unwrap();
        }
        assert_eq!(buffer.parse(), Some(Ok(2.0)));

        buffer.clear();
        for c in ".5".chars() {
            buffer.push(c).unwrap();
        }
        assert_eq!(buffer.parse(), Some(Ok(0.5)));
    }

    #[test]
    fn test_malformed() {
        let mut buffer = LiteralBuffer::with_capacity(8);
        for c in "1.2.3".chars() {
            buffer.push(c).unwrap();
        }
        assert_eq!(
            buffer.parse(),
            Some(Err(EvalError::MalformedLiteral("1.2.3".to_string())))
        );

        buffer.clear();
        buffer.push('.').unwrap();
        assert!(matches!(buffer.parse(), Some(Err(_))));
    }

    #[test]
    fn test_capacity() {
        let mut buffer = LiteralBuffer::with_capacity(3);
        buffer.push('1').unwrap();
        buffer.push('2').unwrap();
        buffer.push('3').unwrap();
        assert_eq!(
            buffer.push('4'),
            Err(EvalError::LiteralTooLong { limit: 3 })
        );
        assert_eq!(buffer.as_str(), "123");
    }
}
