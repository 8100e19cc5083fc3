use std::fmt::{self, Write};

/// 日志预览：折叠连续空白并截断到 `max_len` 个字符，超长时追加省略号
/// 只在格式化时遍历原字符串，不分配新的 String
#[inline(always)]
pub fn preview_compact<'a>(s: &'a str, max_len: usize) -> impl fmt::Display + 'a {
    struct CompactView<'a> {
        source: &'a str,
        max_length: usize,
    }

    impl<'a> fmt::Display for CompactView<'a> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut char_count = 0;
            let mut last_was_whitespace = false;

            for ch in self.source.chars() {
                if ch.is_whitespace() {
                    if last_was_whitespace {
                        continue;
                    }
                    last_was_whitespace = true;
                } else {
                    last_was_whitespace = false;
                }

                if char_count == self.max_length {
                    return f.write_char('…');
                }

                if ch.is_whitespace() {
                    f.write_char(' ')?;
                } else {
                    f.write_char(ch)?;
                }
                char_count += 1;
            }
            Ok(())
        }
    }

    CompactView {
        source: s,
        max_length: max_len,
    }
}
