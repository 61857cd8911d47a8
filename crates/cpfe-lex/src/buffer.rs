//! Two-buffer streaming character source with bounded retraction.
//!
//! Grounded in `lexer.c`'s `twinBuffer`/`createTwinBuffer`/
//! `getNextCharFromBuffer`/`retract`/`switchBuffer`/`loadBuffer`. Two
//! 512-byte buffers, a sentinel (`\0`) marking the end of valid data in
//! whichever buffer was read last, and a forward pointer into the active
//! buffer.

use std::io::Read;

pub const DEFAULT_BUFFER_SIZE: usize = 512;
const SENTINEL: u8 = 0;

pub struct TwinBuffer<R> {
    source: R,
    buffers: [Vec<u8>; 2],
    chars_in_buffer: [usize; 2],
    current: usize,
    forward: usize,
    source_exhausted: bool,
    buf_size: usize,
}

impl<R: Read> TwinBuffer<R> {
    pub fn new(source: R) -> std::io::Result<Self> {
        Self::with_capacity(source, DEFAULT_BUFFER_SIZE)
    }

    /// Same as `new`, but with a caller-chosen per-buffer capacity instead of
    /// `DEFAULT_BUFFER_SIZE` — threaded from `Config::buffer_size`.
    pub fn with_capacity(mut source: R, buf_size: usize) -> std::io::Result<Self> {
        let mut buf0 = vec![0u8; buf_size];
        let n0 = read_fill(&mut source, &mut buf0)?;
        let mut buffers = [buf0, vec![0u8; buf_size]];
        buffers[1].clear();

        Ok(Self {
            source,
            buffers,
            chars_in_buffer: [n0, 0],
            current: 0,
            forward: 0,
            source_exhausted: n0 < buf_size,
            buf_size,
        })
    }

    fn load(&mut self, which: usize) {
        let n = read_fill(&mut self.source, &mut self.buffers[which]).unwrap_or(0);
        self.chars_in_buffer[which] = n;
        if n < self.buf_size {
            self.source_exhausted = true;
        }
    }

    fn switch(&mut self) {
        self.current = 1 - self.current;
        self.forward = 0;
        self.load(self.current);
    }

    /// Returns the next source byte, or `None` on true end-of-input.
    pub fn next_char(&mut self) -> Option<u8> {
        let filled = self.chars_in_buffer[self.current];
        let ch = if self.forward < filled {
            self.buffers[self.current][self.forward]
        } else {
            SENTINEL
        };

        if ch == SENTINEL {
            if filled < self.buf_size {
                return None;
            }
            self.switch();
            let filled2 = self.chars_in_buffer[self.current];
            if self.forward >= filled2 {
                return None;
            }
            let ch2 = self.buffers[self.current][self.forward];
            self.forward += 1;
            return Some(ch2);
        }

        self.forward += 1;
        Some(ch)
    }

    /// Unreads `n` characters (1 or 2 only — the lexer never retracts
    /// further than that).
    pub fn retract(&mut self, n: usize) {
        debug_assert!(n == 1 || n == 2, "retract() only ever unwinds 1 or 2 chars");
        let forward = self.forward as isize - n as isize;
        if forward < 0 {
            self.current = 1 - self.current;
            let restored = self.chars_in_buffer[self.current] as isize + forward;
            self.forward = restored.max(0) as usize;
        } else {
            self.forward = forward as usize;
        }
    }
}

fn read_fill<R: Read>(source: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match source.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(_) => break, // I/O errors surface as end-of-input; no partial retry.
        }
    }
    Ok(total)
}
