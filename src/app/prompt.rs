use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

/// 콘솔 입출력. 테스트에서는 바이트 버퍼로 대체한다.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> Prompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// 질문을 출력하고 한 줄을 읽는다. 입력이 끝났으면 빈 문자열.
    pub async fn ask(&mut self, label: &str) -> Result<String> {
        self.writer.write_all(label.as_bytes()).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .await
            .context("입력 읽기 실패")?;
        Ok(line.trim().to_string())
    }

    pub async fn say(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ask_trims_and_handles_eof() {
        let input: &[u8] = b"  2024 \n";
        let mut prompter = Prompter::new(input, Vec::new());

        assert_eq!(prompter.ask("년도: ").await.unwrap(), "2024");
        assert_eq!(prompter.ask("월: ").await.unwrap(), "", "입력 끝은 빈 문자열");

        let out = String::from_utf8(prompter.into_writer()).unwrap();
        assert_eq!(out, "년도: 월: ");
    }
}
