use assert_cmd::Command;

fn executable() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

const DEMO_OUTPUT: &str = "\
Account Details for Account (ID: S123):
   Holder: John Doe
   Balance: $1000
   Interest Rate: 2%
Account Details for Account (ID: C456):
   Holder: Jane Doe
   Balance: $2000
   Overdraft Limit: $500
Deposited $500 into the account.
Withdrawn $1000 from the current account.
Account Details for Account (ID: S123):
   Holder: John Doe
   Balance: $1500
   Interest Rate: 2%
Account Details for Account (ID: C456):
   Holder: Jane Doe
   Balance: $1000
   Overdraft Limit: $500
Transferred $1000 from one account to another.
Account Details for Account (ID: S123):
   Holder: John Doe
   Balance: $2500
   Interest Rate: 2%
Account Details for Account (ID: S123):
   Holder: John Doe
   Balance: $2500
   Overdraft Limit: $500
";

#[test]
fn demo_output() {
    let out = executable()
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(String::from_utf8(out).unwrap(), DEMO_OUTPUT);
}

#[test]
fn arguments_are_ignored() {
    let out = executable()
        .args(["extra", "--summary"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(String::from_utf8(out).unwrap(), DEMO_OUTPUT);
}
