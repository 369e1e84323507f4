use phishnet::classifier::Classifier;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Testing the classifier against known phishing and safe URLs...");

    let classifier = Classifier::default();

    let phishing_urls = [
        "http://192.168.1.10/login/verify/account",
        "https://bit.ly/abc123",
        "https://secure-login-verify-account-update.xyz",
        "http://paypal.account-verify.tk/webscr",
        "https://user@banking.example.com",
        "http://example.com",
    ];

    let safe_urls = [
        "https://example.com",
        "https://www.wikipedia.org/wiki/Rust",
        "https://github.com",
    ];

    println!("\n=== Expected phishing ===");
    for url in phishing_urls {
        let result = classifier.classify(url);
        println!(
            "  {} -> score={:.3} risk={:.1}%",
            url, result.score, result.risk_percentage
        );
        println!("    {}", result.explanation);
        assert!(result.phishing, "expected phishing verdict for {}", url);
    }

    println!("\n=== Expected safe ===");
    for url in safe_urls {
        let result = classifier.classify(url);
        println!(
            "  {} -> score={:.3} safety={:.1}%",
            url, result.score, result.safety_percentage
        );
        println!("    {}", result.explanation);
        assert!(!result.phishing, "expected safe verdict for {}", url);
    }

    println!("\nAll known-URL expectations held.");
    Ok(())
}
