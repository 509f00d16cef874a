//! Common test utilities and fixtures
//!
//! Shared functionality used across all test modules: an in-process HTTP stub
//! and page bodies shaped like the ReadManga site.
// Common test utilities and constants - all must be public

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[allow(dead_code)]
pub const TEST_TIMEOUT: Duration = Duration::from_secs(10);

#[allow(dead_code)]
pub const MANGA_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Берсерк</title></head>
<body>
<div class="leftContent">
  <h1 class="names"><span class="name">Берсерк</span></h1>
  <div class="chapters">
    <table class="table table-hover">
      <tr>
        <td class="item-title">
          <a href="/berserk/vol41/364" class="chapter-link cp-l">
            Том 41. Глава 364
            <sup>new</sup>
          </a>
        </td>
        <td class="date">08.09.21</td>
      </tr>
      <tr>
        <td class="item-title">
          <a href="/berserk/vol41/363" class="chapter-link cp-l">Том 41. Глава 363</a>
        </td>
      </tr>
      <tr>
        <td class="item-title">
          <a href="berserk/vol40/362" class="chapter-link">Том 40. Глава 362</a>
        </td>
      </tr>
    </table>
  </div>
  <a href="/berserk/vol1/1" class="chapter-link read-first">Читать с первой главы</a>
</div>
</body>
</html>"#;

#[allow(dead_code)]
pub const PAGE_WITHOUT_CHAPTERS: &str = r#"<html><body>
<div class="leftContent"><p>Манга удалена по просьбе правообладателя</p></div>
</body></html>"#;

#[allow(dead_code)]
pub const FRONT_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<div id="popular">
  <div class="tile">
    <div class="desc"><h3><a href="/ignored">Not an update</a></h3></div>
    <div class="chapters-text"><strong><a href="/ignored/vol1/1">Глава 1</a></strong></div>
  </div>
</div>
<div id="last-updates">
  <div class="tile col-sm-6">
    <div class="img"><a href="/vagabond"><img src="/uploads/vagabond.jpg"></a></div>
    <div class="desc">
      <h3><a href="/vagabond" title="Бродяга">Бродяга</a></h3>
      <div class="chapters-text"><strong><a href="/vagabond/vol37/327">Том 37. Глава 327</a></strong></div>
    </div>
  </div>
  <div class="tile col-sm-6">
    <div class="desc">
      <h3><a href="/berserk" title="Берсерк">Берсерк</a></h3>
      <div class="chapters-text"><strong><a href="/berserk/vol41/364">Том 41. Глава 364</a></strong></div>
    </div>
  </div>
  <div class="tile col-sm-6">
    <div class="desc">
      <h3><a href="/monster">Монстр</a></h3>
      <div class="chapters-text"><strong><a href="/monster/vol18/162">Том 18. Глава 162</a></strong></div>
    </div>
  </div>
  <div class="tile col-sm-6">
    <div class="desc">
      <h3><a href="/berserk">Берсерк</a></h3>
      <div class="chapters-text"><strong><a href="/berserk/vol41/365">Том 41. Глава 365</a></strong></div>
    </div>
  </div>
</div>
</body>
</html>"#;

#[allow(dead_code)]
pub const READER_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<script type="text/javascript">
  var prevLink = "/berserk/vol41/363";
  rm_h.readerDoInit([["http://x/","1.jpg",800,1200],["http://x/","2.jpg",800,1200]], false, [], true);
</script>
</head>
<body><div id="fotocontext"></div></body>
</html>"#;

#[allow(dead_code)]
pub const READER_PAGE_WITHOUT_MANIFEST: &str = r#"<html><body>
<p>Глава недоступна</p>
</body></html>"#;

/// Builds a suggestions payload with `count` entries named `Manga 0`, `Manga 1`, ...
#[allow(dead_code)]
pub fn suggestions_json(count: usize) -> String {
    let entries: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "value": format!("Manga {}", i),
                "link": format!("/manga_{} ", i),
                "thumbnail": format!("https://staticrm.example/uploads/pics/{}.jpg", i),
                "additional": format!("Author {}", i),
            })
        })
        .collect();

    serde_json::json!({ "suggestions": entries }).to_string()
}

/// One request observed by [`StubServer`].
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub target: String,
    pub user_agent: Option<String>,
    /// Header names lowercased
    pub headers: HashMap<String, String>,
}

/// Minimal HTTP/1.1 server answering canned bodies by request path.
///
/// Query strings are ignored for routing but kept in the recorded target.
/// Unknown paths answer 404. Every response closes its connection.
#[allow(dead_code)]
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    task: JoinHandle<()>,
}

#[allow(dead_code)]
impl StubServer {
    pub async fn start(routes: &[(&str, u16, &str)]) -> Self {
        let routes: Vec<(&str, u16, &[u8])> = routes
            .iter()
            .map(|(path, status, body)| (*path, *status, body.as_bytes()))
            .collect();
        Self::start_bytes(&routes).await
    }

    /// Like [`StubServer::start`], for bodies that are not valid UTF-8.
    pub async fn start_bytes(routes: &[(&str, u16, &[u8])]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let routes: Arc<HashMap<String, (u16, Vec<u8>)>> = Arc::new(
            routes
                .iter()
                .map(|(path, status, body)| (path.to_string(), (*status, body.to_vec())))
                .collect(),
        );
        let requests = Arc::new(Mutex::new(Vec::new()));

        let task = tokio::spawn({
            let requests = requests.clone();
            async move {
                while let Ok((mut socket, _)) = listener.accept().await {
                    let routes = routes.clone();
                    let requests = requests.clone();

                    tokio::spawn(async move {
                        let mut head: Vec<u8> = Vec::new();
                        let mut chunk = [0u8; 4096];
                        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                            match socket.read(&mut chunk).await {
                                Ok(0) | Err(_) => return,
                                Ok(n) => head.extend_from_slice(&chunk[..n]),
                            }
                        }

                        let head = String::from_utf8_lossy(&head).to_string();
                        let target = head.split_whitespace().nth(1).unwrap_or("/").to_string();
                        let headers: HashMap<String, String> = head
                            .lines()
                            .skip(1)
                            .filter_map(|line| {
                                let (name, value) = line.split_once(':')?;
                                Some((name.trim().to_ascii_lowercase(), value.trim().to_string()))
                            })
                            .collect();

                        requests.lock().unwrap().push(RecordedRequest {
                            target: target.clone(),
                            user_agent: headers.get("user-agent").cloned(),
                            headers,
                        });

                        let path = target.split('?').next().unwrap_or("/");
                        let (status, body) = routes
                            .get(path)
                            .cloned()
                            .unwrap_or((404, b"not found".to_vec()));

                        let mut response = format!(
                            "HTTP/1.1 {} {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                            status,
                            reason(status),
                            body.len()
                        )
                        .into_bytes();
                        response.extend_from_slice(&body);
                        let _ = socket.write_all(&response).await;
                        let _ = socket.shutdown().await;
                    });
                }
            }
        });

        Self {
            base_url: format!("http://{}/", addr),
            requests,
            task,
        }
    }

    /// URL of `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[allow(dead_code)]
fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Installs a test subscriber so `RUST_LOG=mangaclient=debug` shows client logs.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
