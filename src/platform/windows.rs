pub const PROHIBITED_CHARS: &[char] = &['<', '>', ':', '"', '/', '|', '?', '*'];
