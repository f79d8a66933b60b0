/// Split `text` into chunks of at most `limit` characters.
///
/// Telegram rejects messages over 4096 characters; callers pass a safe limit
/// below that. Splitting counts characters, not bytes, so multi-byte text
/// never lands on a chunk boundary mid-character. Concatenating the chunks
/// reproduces the input exactly.
pub fn split_plain_chunks(text: &str, limit: usize) -> Vec<String> {
    if text.len() <= limit {
        // Byte length bounds char count, so this fits in one message.
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut count = 0usize;

    for ch in text.chars() {
        chunk.push(ch);
        count += 1;
        if count == limit {
            chunks.push(std::mem::take(&mut chunk));
            count = 0;
        }
    }

    if !chunk.is_empty() {
        chunks.push(chunk);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_chunk() {
        assert_eq!(split_plain_chunks("hello", 4000), vec!["hello"]);
    }

    #[test]
    fn empty_text_is_one_empty_chunk() {
        assert_eq!(split_plain_chunks("", 4000), vec![""]);
    }

    #[test]
    fn exact_limit_is_one_chunk() {
        let text = "x".repeat(4000);
        assert_eq!(split_plain_chunks(&text, 4000), vec![text]);
    }

    #[test]
    fn long_text_splits_and_reassembles() {
        let text = "a".repeat(8500);
        let chunks = split_plain_chunks(&text, 4000);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chars().count(), 4000);
        assert_eq!(chunks[1].chars().count(), 4000);
        assert_eq!(chunks[2].chars().count(), 500);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        // 3 bytes per char, so byte-based splitting would panic here.
        let text = "愛".repeat(5000);
        let chunks = split_plain_chunks(&text, 4000);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 4000);
        assert_eq!(chunks[1].chars().count(), 1000);
        assert_eq!(chunks.concat(), text);
    }
}
