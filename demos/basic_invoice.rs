use ekuatia::core::*;
use rust_decimal_macros::dec;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ekuatia=debug")),
        )
        .init();

    let ruc = format_ruc("80016096");
    println!("RUC:     {ruc}");

    let draft = InvoiceDraftBuilder::new()
        .client(
            ClientBuilder::legal("Comercial Guaraní S.A.", &ruc)
                .address("Av. San Blas 123")
                .phone("0981 123 456")
                .email("compras@guarani.com.py")
                .build(),
        )
        .add_item(
            LineItemBuilder::new("Consultoría (horas)", dec!(8), dec!(150000))
                .code("SRV-01")
                .unit("Hora")
                .build(),
        )
        .add_item(
            LineItemBuilder::new("Harina", dec!(2.5), dec!(8400))
                .unit("Kilogramo")
                .tax(TaxBucket::Tax5)
                .build(),
        )
        .add_item(
            LineItemBuilder::new("Libro contable", dec!(1), dec!(45000))
                .tax(TaxBucket::Exempt)
                .build(),
        )
        .build();

    let errors = validate_draft(&draft);
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("  {e}");
        }
        std::process::exit(1);
    }

    let totals = draft.totals();
    println!("Exentas: {}", totals.subtotal_exempt);
    println!("IVA 5%:  {}", totals.subtotal_5);
    println!("IVA 10%: {}", totals.subtotal_10);
    println!("Total:   {} PYG", totals.total);
    println!("IVA:     {} PYG", totals.iva_total_rounded());
    println!("---");

    let mut sequence = DocumentNumberSequence::starting_at("001", "001", 42).expect("valid sequence");
    let number = sequence.next_number().expect("sequence not exhausted");
    let meta = SubmissionMetadata::for_document(&number, Issuer::new("4567890", "Ana Gómez"));

    let body = assemble(&draft, &meta).expect("draft should assemble");
    println!("Document: {number}");
    println!(
        "{}",
        serde_json::to_string_pretty(&body).expect("submission serializes")
    );
}
