use crate::cli::shell_context::{LoopControl, ShellContext};
use crate::cli::validation::InputKind;
use crate::core::Registration;
use crate::domain::Profile;
use crate::errors::{BankError, CliError};

pub const TITLE: &str = "Welcome to Teller Bank";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestAction {
    CreateAccount,
    Login,
    Exit,
}

impl GuestAction {
    const ALL: [GuestAction; 3] = [GuestAction::CreateAccount, GuestAction::Login, GuestAction::Exit];

    pub fn from_choice(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            GuestAction::CreateAccount => "Create New Account",
            GuestAction::Login => "Login",
            GuestAction::Exit => "Exit",
        }
    }

    pub fn labels() -> [&'static str; 3] {
        Self::ALL.map(Self::label)
    }
}

pub fn handle(context: &mut ShellContext, action: GuestAction) -> Result<LoopControl, CliError> {
    match action {
        GuestAction::CreateAccount => create_account(context),
        GuestAction::Login => login(context),
        GuestAction::Exit => exit(context),
    }
}

fn create_account(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    context.printer.header("Enter Details For New Account");

    let profile = {
        let mut input = context.validator();
        Profile {
            first_name: input.read_validated("First name:", InputKind::Name)?,
            last_name: input.read_validated("Last name:", InputKind::Name)?,
            address: input.read_validated("Address:", InputKind::Any)?,
            email: input.read_validated("Email:", InputKind::Email)?,
            phone_number: input.read_validated("Phone number (10 digits):", InputKind::Phone)?,
        }
    };

    let username = loop {
        let candidate = context
            .validator()
            .read_validated("Username:", InputKind::Username)?;
        if context.controller.directory().contains(&candidate) {
            context.printer.error(BankError::DuplicateUsername(candidate));
        } else {
            break candidate;
        }
    };

    let (password, initial_deposit) = {
        let mut input = context.validator();
        let password = input.read_validated(
            "Password (8+ characters, lower, upper and special):",
            InputKind::Password,
        )?;
        let deposit = input.read_amount("Initial deposit amount:")?;
        (password, deposit)
    };

    let customer = context.controller.directory_mut().register(Registration {
        username,
        password,
        profile,
        initial_deposit,
    })?;
    let message = format!(
        "Account has been successfully created. Welcome, {}! Opening balance: {}",
        customer.profile.full_name(),
        customer.account().balance()
    );
    context.printer.system(message);
    Ok(LoopControl::Continue)
}

fn login(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    context.printer.header("Login");
    loop {
        let username = context.validator().read_raw("Username:")?;
        if !context.controller.directory().contains(&username) {
            if unknown_user_gives_up(context)? {
                return Ok(LoopControl::Continue);
            }
            continue;
        }
        let password = context.validator().read_secret("Password:")?;

        let outcome = context
            .controller
            .login(&username, &password)
            .map(|customer| customer.profile.full_name());
        match outcome {
            Ok(full_name) => {
                context.printer.system(format!("Welcome back, {}!", full_name));
                return Ok(LoopControl::Continue);
            }
            Err(BankError::NotFound(_)) => {
                if unknown_user_gives_up(context)? {
                    return Ok(LoopControl::Continue);
                }
            }
            Err(BankError::InvalidCredentials) => {
                context.printer.error("Invalid Credentials. Try Again!");
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Reports the unknown username and asks whether to retry.
fn unknown_user_gives_up(context: &mut ShellContext) -> Result<bool, CliError> {
    context.printer.error("No such user exists.");
    Ok(!context.validator().confirm("Would you like to try again?")?)
}

fn exit(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    if context
        .validator()
        .confirm("Are you sure you want to quit the program?")?
    {
        context.printer.system("Thank you for banking with Teller Bank. Goodbye!");
        Ok(LoopControl::Exit)
    } else {
        Ok(LoopControl::Continue)
    }
}
