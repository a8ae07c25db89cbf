use crate::cli::shell_context::{LoopControl, ShellContext};
use crate::domain::{Customer, Displayable, Identifiable};
use crate::errors::{BankError, CliError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerAction {
    Deposit,
    Withdraw,
    Transfer,
    RecentTransactions,
    CustomerInformation,
    SignOut,
}

impl CustomerAction {
    const ALL: [CustomerAction; 6] = [
        CustomerAction::Deposit,
        CustomerAction::Withdraw,
        CustomerAction::Transfer,
        CustomerAction::RecentTransactions,
        CustomerAction::CustomerInformation,
        CustomerAction::SignOut,
    ];

    pub fn from_choice(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            CustomerAction::Deposit => "Deposit Amount",
            CustomerAction::Withdraw => "Withdraw Amount",
            CustomerAction::Transfer => "Funds Transfer",
            CustomerAction::RecentTransactions => "View Recent Transactions",
            CustomerAction::CustomerInformation => "Display Customer Information",
            CustomerAction::SignOut => "Sign Out",
        }
    }

    pub fn labels() -> [&'static str; 6] {
        Self::ALL.map(Self::label)
    }
}

pub fn title(context: &ShellContext) -> String {
    match context.controller.current_customer() {
        Some(customer) => format!("Customer Menu: {}", customer.display_label()),
        None => "Customer Menu".to_string(),
    }
}

pub fn handle(context: &mut ShellContext, action: CustomerAction) -> Result<LoopControl, CliError> {
    match action {
        CustomerAction::Deposit => deposit(context),
        CustomerAction::Withdraw => withdraw(context),
        CustomerAction::Transfer => transfer(context),
        CustomerAction::RecentTransactions => recent_transactions(context),
        CustomerAction::CustomerInformation => customer_information(context),
        CustomerAction::SignOut => sign_out(context),
    }
}

fn deposit(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let amount = context.validator().read_amount("Enter deposit amount:")?;
    let record = context.controller.deposit(amount)?;
    context.printer.system(record);
    Ok(LoopControl::Continue)
}

fn withdraw(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let amount = context.validator().read_amount("Enter withdrawal amount:")?;
    let record = context.controller.withdraw(amount)?;
    context.printer.system(record);
    Ok(LoopControl::Continue)
}

fn transfer(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let current = context
        .controller
        .current_username()
        .ok_or(BankError::NotAuthenticated)?
        .to_string();
    let directory = context.controller.directory();
    let recipients: Vec<String> = directory
        .usernames_except(&current)
        .filter_map(|username| directory.get(username).ok())
        .map(|customer| customer.display_label())
        .collect();
    if recipients.is_empty() {
        context.printer.info("No other customers to transfer to.");
        return Ok(LoopControl::Continue);
    }

    context.printer.header("Funds Transfer");
    context
        .printer
        .info(format!("Recipients: {}", recipients.join(", ")));
    let (destination, amount) = {
        let mut input = context.validator();
        let destination = input.read_raw("Recipient username:")?;
        let amount = input.read_amount("Enter transfer amount:")?;
        (destination, amount)
    };
    let record = context.controller.transfer_to(&destination, amount)?;
    context.printer.system(record);
    Ok(LoopControl::Continue)
}

fn recent_transactions(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let limit = context.config.recent_transaction_limit;
    let records = context.controller.recent_transactions(limit)?;
    if records.is_empty() {
        context.printer.info("No transactions yet.");
        return Ok(LoopControl::Continue);
    }
    context
        .printer
        .header(format!("{} Recent Transactions", records.len()));
    for record in records {
        context.printer.info(record);
    }
    Ok(LoopControl::Continue)
}

fn customer_information(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let customer = context
        .controller
        .current_customer()
        .ok_or(BankError::NotAuthenticated)?;
    context.printer.header("Customer Information");
    for line in information_lines(customer) {
        context.printer.info(line);
    }
    Ok(LoopControl::Continue)
}

fn information_lines(customer: &Customer) -> Vec<String> {
    let profile = &customer.profile;
    let account = customer.account();
    vec![
        format!("Name: {}", profile.full_name()),
        format!("Username: {}", customer.username()),
        format!("Address: {}", profile.address),
        format!("Phone: {}", profile.phone_number),
        format!("Email: {}", profile.email),
        format!("Account: {}", account.id()),
        format!("Opened: {}", account.opened_at.format("%Y-%m-%d")),
        format!("Balance: {}", account.balance()),
    ]
}

fn sign_out(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    if context
        .validator()
        .confirm("Are you sure you want to sign out?")?
    {
        context.printer.system("Signing out...");
        context.controller.logout();
    }
    Ok(LoopControl::Continue)
}
