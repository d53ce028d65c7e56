// mirador-client/examples/submit_checkin.rs
// Submit a diagnostic check-in against a local PMS instance
//
// Usage:
//   MIRADOR_TOKEN=<bearer> cargo run --example submit_checkin

use mirador_client::{CheckInPipeline, CheckInRequest, ClientConfig, PaymentMethod, SubmissionSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let base_url =
        std::env::var("MIRADOR_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let token = std::env::var("MIRADOR_TOKEN").unwrap_or_default();

    let config = ClientConfig::new(base_url).with_token(token);
    let client = config.build_http_client()?;
    let pipeline = CheckInPipeline::new(client);

    let today = chrono::Local::now().date_naive();
    let request = CheckInRequest {
        is_walk_in: true,
        room_number: "305".to_string(),
        guest_name: "Maria Fernandez".to_string(),
        guest_email: "maria@example.com".to_string(),
        guest_phone: "+34 600 000 000".to_string(),
        guest_nationality: "ES".to_string(),
        identification_number: "X1234567".to_string(),
        check_in_date: Some(today),
        check_out_date: today.succ_opt(),
        adults: 2,
        payment_method: Some(PaymentMethod::Cash),
        ..Default::default()
    };

    match pipeline.submit(SubmissionSource::fixed_test(), request).await {
        Ok(result) => {
            println!(
                "Check-in accepted: folio {:?} via {}",
                result.folio_id, result.endpoint_used
            );
        }
        Err(err) => {
            println!("Check-in failed ({:?}): {}", err.kind, err.message);
        }
    }

    Ok(())
}
