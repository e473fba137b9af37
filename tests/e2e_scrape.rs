use std::future::Future;
use std::time::Duration;

use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use momo_exporter::exporter::{Exporter, encode_text};

fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

/// Serves the same canned HTTP response to every connection and returns the
/// URI to scrape.
async fn spawn_server(status_line: &str, body: String) -> Result<String, String> {
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body,
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("Failed to bind server: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("Failed to read server addr: {}", err))?;

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let mut request = [0_u8; 1024];
            let _ = stream.read(&mut request).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    Ok(format!("http://{}/metrics", addr))
}

fn envelope(stats: &serde_json::Value) -> String {
    json!({
        "version": "WebRTC Native Client Momo 2023.1.0",
        "environment": "Ubuntu-22.04_x86_64",
        "libwebrtc": "Shiguredo-Build M114.5735@{#4}",
        "stats": stats.to_string(),
    })
    .to_string()
}

async fn scrape_once(uri: &str) -> Result<String, String> {
    let exporter = Exporter::new(uri, true, Duration::from_secs(5))
        .map_err(|err| format!("Failed to build exporter: {}", err))?;
    let families = exporter.collect().await;
    encode_text(&families).map_err(|err| format!("Failed to encode: {}", err))
}

#[test]
fn healthy_momo_scrapes_end_to_end() -> Result<(), String> {
    run_async_test(async {
        let stats = json!([
            {
                "type": "codec",
                "id": "RTCCodec_0_Outbound_102",
                "payloadType": 102,
                "mimeType": "video/VP8",
                "clockRate": 90000,
            },
            {
                "type": "data-channel",
                "id": "DC1",
                "label": "serial",
                "bytesSent": 20,
                "bytesReceived": 10,
                "messagesSent": 2,
                "messagesReceived": 1,
            },
            {
                "type": "outbound-rtp",
                "id": "OT01V",
                "kind": "video",
                "ssrc": 1_234_567,
                "transportId": "RTCTransport_0_1",
                "codecId": "RTCCodec_0_Outbound_102",
                "bytesSent": 4096,
                "framesEncoded": 30,
                "targetBitrate": 300_000.0,
            },
        ]);
        let uri = spawn_server("200 OK", envelope(&stats)).await?;

        let text = scrape_once(&uri).await?;
        if !text.contains("momo_up 1") {
            return Err(format!("Expected momo_up 1 in:\n{}", text));
        }
        if !text.contains("momo_exporter_scrapes_total 1") {
            return Err(format!("Expected one scrape counted in:\n{}", text));
        }
        if !text.contains("momo_exporter_json_parse_failures_total 0") {
            return Err(format!("Expected zero parse failures in:\n{}", text));
        }
        if !text.contains(
            "momo_version_info{environment=\"Ubuntu-22.04_x86_64\",libwebrtc=\"Shiguredo-Build M114.5735@{#4}\",version=\"WebRTC Native Client Momo 2023.1.0\"} 1",
        ) {
            return Err(format!("Expected version info in:\n{}", text));
        }
        if !text.contains("momo_datachannel_bytes_sent_total{id=\"DC1\",label=\"serial\"} 20") {
            return Err(format!("Expected data-channel counter in:\n{}", text));
        }
        if !text.contains(
            "momo_codec_RTCCodec_0_Outbound_102{clock_rate=\"90000\",id=\"RTCCodec_0_Outbound_102\",mime_type=\"video/VP8\",payload_type=\"102\"} 102",
        ) {
            return Err(format!("Expected codec gauge in:\n{}", text));
        }
        if !text.contains(
            "momo_outbound_rtp_bytes_sent_total{codec_id=\"RTCCodec_0_Outbound_102\",id=\"OT01V\",kind=\"video\",ssrc=\"1234567\",transport_id=\"RTCTransport_0_1\"} 4096",
        ) {
            return Err(format!("Expected outbound-rtp counter in:\n{}", text));
        }
        Ok(())
    })
}

#[test]
fn negative_counter_field_does_not_break_the_scrape() -> Result<(), String> {
    run_async_test(async {
        let stats = json!([
            {
                "type": "data-channel",
                "id": "DC1",
                "label": "serial",
                "bytesSent": -5,
                "bytesReceived": 10,
            }
        ]);
        let uri = spawn_server("200 OK", envelope(&stats)).await?;

        let text = scrape_once(&uri).await?;
        if !text.contains("momo_up 1") {
            return Err(format!("Expected momo_up 1 in:\n{}", text));
        }
        if text.contains("momo_datachannel_bytes_sent_total") {
            return Err(format!("Expected negative counter dropped in:\n{}", text));
        }
        if !text.contains("momo_datachannel_bytes_received_total{id=\"DC1\",label=\"serial\"} 10") {
            return Err(format!("Expected the valid counter in:\n{}", text));
        }
        Ok(())
    })
}

#[test]
fn truncated_envelope_reports_down_and_a_parse_failure() -> Result<(), String> {
    run_async_test(async {
        let uri = spawn_server("200 OK", "{".to_owned()).await?;

        let text = scrape_once(&uri).await?;
        if !text.contains("momo_up 0") {
            return Err(format!("Expected momo_up 0 in:\n{}", text));
        }
        if !text.contains("momo_exporter_json_parse_failures_total 1") {
            return Err(format!("Expected one parse failure in:\n{}", text));
        }
        if text.contains("momo_version_info") {
            return Err("Version info must not render without an envelope".to_owned());
        }
        Ok(())
    })
}

#[test]
fn unparseable_stats_keep_version_info() -> Result<(), String> {
    run_async_test(async {
        let body = json!({
            "version": "WebRTC Native Client Momo 2023.1.0",
            "environment": "Ubuntu-22.04_x86_64",
            "libwebrtc": "Shiguredo-Build M114.5735@{#4}",
            "stats": "not json at all",
        })
        .to_string();
        let uri = spawn_server("200 OK", body).await?;

        let text = scrape_once(&uri).await?;
        if !text.contains("momo_up 0") {
            return Err(format!("Expected momo_up 0 in:\n{}", text));
        }
        if !text.contains("momo_exporter_json_parse_failures_total 1") {
            return Err(format!("Expected one parse failure in:\n{}", text));
        }
        if !text.contains("momo_version_info") {
            return Err(format!("Expected version info to survive in:\n{}", text));
        }
        Ok(())
    })
}

#[test]
fn upstream_error_status_reports_down() -> Result<(), String> {
    run_async_test(async {
        let uri = spawn_server("500 Internal Server Error", String::new()).await?;

        let text = scrape_once(&uri).await?;
        if !text.contains("momo_up 0") {
            return Err(format!("Expected momo_up 0 in:\n{}", text));
        }
        if !text.contains("momo_exporter_scrapes_total 1") {
            return Err(format!("Expected the scrape counted in:\n{}", text));
        }
        if !text.contains("momo_exporter_json_parse_failures_total 0") {
            return Err(format!("Expected zero parse failures in:\n{}", text));
        }
        Ok(())
    })
}

#[test]
fn scrape_counter_accumulates_across_collects() -> Result<(), String> {
    run_async_test(async {
        let uri = spawn_server("200 OK", envelope(&json!([]))).await?;
        let exporter = Exporter::new(&uri, true, Duration::from_secs(5))
            .map_err(|err| format!("Failed to build exporter: {}", err))?;

        let _ = exporter.collect().await;
        let _ = exporter.collect().await;
        let families = exporter.collect().await;
        let text = encode_text(&families).map_err(|err| format!("Failed to encode: {}", err))?;

        if !text.contains("momo_exporter_scrapes_total 3") {
            return Err(format!("Expected three scrapes counted in:\n{}", text));
        }
        Ok(())
    })
}
