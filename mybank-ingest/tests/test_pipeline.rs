use mybank_ingest::{RawAccount, RawBank, RawOperation, decode_banks, process};

fn raw_op(title: &str, date: i64, amount: &str) -> RawOperation {
    RawOperation {
        title: title.to_string(),
        date,
        amount: amount.to_string(),
    }
}

fn raw_bank(name: &str, flag: i64, accounts: Vec<RawAccount>) -> RawBank {
    RawBank {
        name: name.to_string(),
        flag,
        accounts,
    }
}

#[test]
fn test_credit_agricole_scenario() {
    let input = vec![raw_bank(
        "Crédit Agricole",
        1,
        vec![RawAccount {
            label: "Compte courant".to_string(),
            balance: "1 234,56 €".to_string(),
            operations: vec![
                raw_op("CB AMAZON", 1_700_000_000, "-45,99"),
                raw_op("Salaire", 1_700_003_600, "1200,00"),
            ],
        }],
    )];

    let banks = process(&input);
    assert_eq!(banks.len(), 1);

    let bank = &banks[0];
    assert_eq!(bank.name, "Crédit Agricole");
    assert!(bank.is_featured);
    assert_eq!(bank.accounts.len(), 1);

    let account = &bank.accounts[0];
    assert_eq!(account.label, "Compte courant");
    assert_eq!(account.balance, "1 234,56 €");

    let ops = &account.operations;
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0].title, "Salaire");
    assert_eq!(ops[0].epoch_seconds, 1_700_003_600);
    assert_eq!(ops[0].amount, 1200.0);
    assert_eq!(ops[1].title, "CB AMAZON");
    assert_eq!(ops[1].epoch_seconds, 1_700_000_000);
    assert!((ops[1].amount - -45.99).abs() < 1e-9);
    assert!(ops.iter().all(|o| o.currency == "€"));
}

#[test]
fn test_banks_sorted_by_name_case_insensitive() {
    let input = vec![
        raw_bank("BNP", 0, vec![]),
        raw_bank("agricole", 1, vec![]),
        raw_bank("Caisse", 0, vec![]),
    ];
    let names: Vec<_> = process(&input).into_iter().map(|b| b.name).collect();
    assert_eq!(names, vec!["agricole", "BNP", "Caisse"]);
}

#[test]
fn test_mixed_units_and_formats() {
    let input = vec![raw_bank(
        "Test Bank",
        0,
        vec![RawAccount {
            label: "Compte principal".to_string(),
            balance: "3450.00€".to_string(),
            operations: vec![
                raw_op("Achat supermarché", 1_707_561_600_000, "-50.00€"),
                raw_op("Salaire", 1_707_475_200_000, "+2500.00€"),
                raw_op("Virement", 1_707_500_000, "pas un montant"),
            ],
        }],
    )];

    let banks = process(&input);
    let ops = &banks[0].accounts[0].operations;
    let summary: Vec<_> = ops
        .iter()
        .map(|o| (o.title.as_str(), o.epoch_seconds, o.amount))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Achat supermarché", 1_707_561_600, -50.0),
            ("Virement", 1_707_500_000, 0.0),
            ("Salaire", 1_707_475_200, 2500.0),
        ]
    );
    assert!(ops[0].is_negative());
    assert_eq!(ops[0].formatted_amount(), "-50,00 €");
    assert_eq!(ops[2].formatted_amount(), "2500,00 €");
}

#[test]
fn test_process_is_idempotent() {
    let json = r#"[
        {"name": "Boursorama", "isCA": 0, "accounts": [
            {"label": "Compte joint", "balance": "12,00 €", "operations": [
                {"title": "b", "date": 5, "amount": "1,00"},
                {"title": "A", "date": 5, "amount": "2,00"},
                {"title": "c", "date": 9000000000000, "amount": "-3,50"}
            ]}
        ]},
        {"name": "CA Languedoc", "isCA": 1, "accounts": []}
    ]"#;
    let raw = decode_banks(json).unwrap();

    let first = process(&raw);
    let second = process(&raw);
    assert_eq!(first, second);

    let titles: Vec<_> = first[0].accounts[0]
        .operations
        .iter()
        .map(|o| o.title.as_str())
        .collect();
    assert_eq!(titles, vec!["c", "A", "b"]);
}

#[test]
fn test_no_operation_dropped_or_duplicated() {
    let ops: Vec<_> = (0..50)
        .map(|i| raw_op(&format!("op{}", i % 7), (i % 5) * 1000, "1,00"))
        .collect();
    let input = vec![raw_bank(
        "B",
        0,
        vec![RawAccount {
            label: "L".to_string(),
            balance: "0".to_string(),
            operations: ops,
        }],
    )];

    let out = &process(&input)[0].accounts[0].operations;
    assert_eq!(out.len(), 50);
    assert!(out.windows(2).all(|w| w[0].epoch_seconds >= w[1].epoch_seconds));
}

fn sample_path() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("banks.json")
}

#[test]
fn test_sample_payload() {
    let json = std::fs::read_to_string(sample_path()).expect("should read banks.json");
    let banks = process(&decode_banks(&json).unwrap());

    let names: Vec<_> = banks.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["BNP Paribas", "boursorama", "Crédit Agricole"]);
    assert!(banks[2].is_featured);
    assert!(banks[1].accounts.is_empty());

    // same timestamp: "Courses" before "loyer"
    let joint: Vec<_> = banks[0].accounts[0].operations.iter().map(|o| o.title.as_str()).collect();
    assert_eq!(joint, vec!["Courses", "loyer"]);

    let courant = &banks[2].accounts[0];
    let titles: Vec<_> = courant.operations.iter().map(|o| o.title.as_str()).collect();
    assert_eq!(titles, vec!["Salaire", "CB AMAZON", "Prélèvement EDF"]);
    assert_eq!(courant.operations[2].epoch_seconds, 1_699_800_000);
    assert_eq!(courant.operations[2].formatted_amount(), "-78,40 €");
    assert_eq!(banks[2].accounts[1].operations[0].amount, 37.5);
}
