//! Interactive Review Session Example
//!
//! Demonstrates the full approval workflow against a running API:
//! 1. Login with username/password
//! 2. Load the submitted-report queue
//! 3. Step through the queue approving or rejecting
//!
//! Run: cargo run --example review_session

use std::io::{self, Write};

use merchdesk_client::ClientConfig;
use merchdesk_review::{DecideOutcome, Decision, ReviewSession};
use shared::models::ReportFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("\nMerchdesk Review Session");
    println!("========================\n");

    let base_url = get_input_with_default("API base URL", "http://localhost:8000");
    let username = get_input("Username: ");
    let password = get_input("Password: ");

    let client = ClientConfig::new(base_url).build_http_client()?;
    client.login(&username, &password).await?;
    println!("Logged in.\n");

    let session = ReviewSession::new(client);
    let count = session.load(&ReportFilter::submitted()).await?;
    println!("{} report(s) pending review.\n", count);

    while !session.is_empty().await {
        session.open(0).await;
        let Some(report) = session.selected_report().await else {
            break;
        };

        println!(
            "Thread #{} — {} — {} item(s), final value {:.2}",
            report.sales_id,
            report.merchandiser_name,
            report.data.len(),
            report.final_value
        );
        for item in &report.data {
            println!(
                "  {} x{} @ {:.2} (-{}%) = {:.2}",
                item.product_name,
                item.quantity_sold,
                item.sales_price,
                item.discount_percent,
                item.final_price
            );
        }

        let choice = get_input("[a]pprove / [r]eject / [q]uit: ");
        let decision = match choice.trim() {
            "a" => Decision::Approved,
            "r" => Decision::Rejected,
            "q" => break,
            _ => continue,
        };

        match session.decide(report.sales_id, decision).await {
            Ok(DecideOutcome::Closed) => {
                println!("Queue drained.\n");
                break;
            }
            Ok(_) => println!("Done, next report.\n"),
            Err(e) => println!("Decision failed ({}), report kept in queue.\n", e),
        }
    }

    println!("{} report(s) left.", session.len().await);
    Ok(())
}

fn get_input(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line.trim().to_string()
}

fn get_input_with_default(prompt: &str, default: &str) -> String {
    let value = get_input(&format!("{} [{}]: ", prompt, default));
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
