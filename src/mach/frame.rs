use super::{Address, Stack};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Control stack frames
///
/// GOSUB, DO and FOR share one stack. Each frame knows which construct
/// pushed it so RETURN, LOOP and NEXT refuse a frame that isn't theirs.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// Pushed by GOSUB; where RETURN resumes.
    Return(Address),
    /// Pushed by DO; where LOOP repeats.
    Repeat(Address),
    /// Pushed by FOR; stays on the stack until NEXT runs past the limit.
    Count {
        step: f64,
        limit: f64,
        addr: Address,
    },
}

impl Frame {
    fn describe(&self) -> &'static str {
        match self {
            Frame::Return(_) => "GOSUB",
            Frame::Repeat(_) => "DO",
            Frame::Count { .. } => "FOR",
        }
    }
}

impl Stack<Frame> {
    pub fn pop_return(&mut self) -> Result<Address> {
        match self.last() {
            Some(Frame::Return(addr)) => {
                let addr = *addr;
                self.pop()?;
                Ok(addr)
            }
            Some(frame) => Err(error!(ReturnWithoutGosub; format!("innermost block is {}", frame.describe()))),
            None => Err(error!(ReturnWithoutGosub)),
        }
    }

    pub fn last_repeat(&self) -> Result<Address> {
        match self.last() {
            Some(Frame::Repeat(addr)) => Ok(*addr),
            Some(frame) => Err(error!(LoopWithoutDo; format!("innermost block is {}", frame.describe()))),
            None => Err(error!(LoopWithoutDo)),
        }
    }

    /// Returns `(step, limit, addr)` of the innermost FOR.
    pub fn last_count(&self) -> Result<(f64, f64, Address)> {
        match self.last() {
            Some(Frame::Count { step, limit, addr }) => Ok((*step, *limit, *addr)),
            Some(frame) => Err(error!(NextWithoutFor; format!("innermost block is {}", frame.describe()))),
            None => Err(error!(NextWithoutFor)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn stack() -> Stack<Frame> {
        Stack::new("CONTROL STACK")
    }

    #[test]
    fn test_return_pops_its_frame() {
        let mut s = stack();
        s.push(Frame::Return(4)).unwrap();
        assert_eq!(s.pop_return().unwrap(), 4);
        assert!(s.is_empty());
    }

    #[test]
    fn test_return_on_empty() {
        let e = stack().pop_return().unwrap_err();
        assert_eq!(e.to_string(), "RETURN without GOSUB");
    }

    #[test]
    fn test_return_refuses_loop_frames() {
        let mut s = stack();
        s.push(Frame::Return(1)).unwrap();
        s.push(Frame::Count {
            step: 1.0,
            limit: 3.0,
            addr: 2,
        })
        .unwrap();
        let e = s.pop_return().unwrap_err();
        assert_eq!(e.code(), ErrorCode::ReturnWithoutGosub);
        assert_eq!(e.detail(), "innermost block is FOR");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_next_refuses_do_frame() {
        let mut s = stack();
        s.push(Frame::Repeat(3)).unwrap();
        let e = s.last_count().unwrap_err();
        assert_eq!(e.code(), ErrorCode::NextWithoutFor);
        assert_eq!(s.last_repeat().unwrap(), 3);
    }

    #[test]
    fn test_loop_refuses_gosub_frame() {
        let mut s = stack();
        s.push(Frame::Return(3)).unwrap();
        assert_eq!(s.last_repeat().unwrap_err().code(), ErrorCode::LoopWithoutDo);
    }

    #[test]
    fn test_count_frame_fields() {
        let mut s = stack();
        s.push(Frame::Count {
            step: -2.0,
            limit: 0.0,
            addr: 9,
        })
        .unwrap();
        assert_eq!(s.last_count().unwrap(), (-2.0, 0.0, 9));
        assert_eq!(s.len(), 1);
    }
}
