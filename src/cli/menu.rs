use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::application::AccountService;
use crate::domain::{Amount, Operation, OperationKind, format_amount, parse_amount};

use super::{Locale, Messages};

/// Printed after every handled menu round.
pub const SEPARATOR: &str = "---------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Balance,
    Overdraft,
    Deposit,
    Withdraw,
    PayBill,
    OverdraftCheck,
    Exit,
}

impl Choice {
    pub fn from_option(option: i32) -> Option<Self> {
        match option {
            1 => Some(Choice::Balance),
            2 => Some(Choice::Overdraft),
            3 => Some(Choice::Deposit),
            4 => Some(Choice::Withdraw),
            5 => Some(Choice::PayBill),
            6 => Some(Choice::OverdraftCheck),
            0 => Some(Choice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
    EndOfInput,
}

/// Interactive text menu over any line-oriented reader and writer.
pub struct Menu<'a, R, W> {
    service: &'a AccountService,
    input: R,
    output: W,
    messages: &'static Messages,
    currency: String,
}

impl<'a, R, W> Menu<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(
        service: &'a AccountService,
        input: R,
        output: W,
        locale: Locale,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            service,
            input,
            output,
            messages: locale.messages(),
            currency: currency.into(),
        }
    }

    /// Run the session until the user picks exit or the input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        let messages = self.messages;
        self.say(messages.welcome).await?;

        loop {
            self.show_menu().await?;

            let Some(line) = self.read_line().await? else {
                debug!("input closed at menu prompt");
                break;
            };

            let input = line.trim();
            if input.is_empty() {
                self.say(messages.empty_option).await?;
                continue;
            }

            let flow = match input.parse::<i32>() {
                Err(_) => {
                    self.say(messages.not_a_number).await?;
                    Flow::Continue
                }
                Ok(option) => match Choice::from_option(option) {
                    Some(choice) => self.dispatch(choice).await?,
                    None => {
                        self.say(messages.invalid_option).await?;
                        Flow::Continue
                    }
                },
            };

            if flow == Flow::EndOfInput {
                debug!("input closed at amount prompt");
                break;
            }

            self.say(SEPARATOR).await?;

            if flow == Flow::Exit {
                break;
            }
        }

        self.output.flush().await
    }

    /// Get the writer back, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    async fn dispatch(&mut self, choice: Choice) -> io::Result<Flow> {
        match choice {
            Choice::Balance => self.show_balance().await?,
            Choice::Overdraft => self.show_overdraft().await?,
            Choice::OverdraftCheck => self.show_overdraft_usage().await?,
            Choice::Deposit => return self.transact(OperationKind::Deposit).await,
            Choice::Withdraw => return self.transact(OperationKind::Withdrawal).await,
            Choice::PayBill => return self.transact(OperationKind::BillPayment).await,
            Choice::Exit => {
                self.say(self.messages.goodbye).await?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    async fn show_menu(&mut self) -> io::Result<()> {
        let messages = self.messages;
        self.say("").await?;
        self.say(messages.menu_title).await?;
        for item in messages.menu_items {
            self.say(item).await?;
        }
        self.prompt(messages.choose_option).await
    }

    async fn show_balance(&mut self) -> io::Result<()> {
        let balance = self.service.balance().await;
        let line = format!("{} {}", self.messages.balance, self.money(balance));
        self.say(&line).await
    }

    async fn show_overdraft(&mut self) -> io::Result<()> {
        let info = self.service.overdraft_info().await;
        let line = format!(
            "{} {} | {} {} | {} {}",
            self.messages.total_limit,
            self.money(info.limit),
            self.messages.used,
            self.money(info.used),
            self.messages.available,
            self.money(info.available),
        );
        self.say(&line).await
    }

    async fn show_overdraft_usage(&mut self) -> io::Result<()> {
        let text = if self.service.is_using_overdraft().await {
            self.messages.using_overdraft
        } else {
            self.messages.not_using_overdraft
        };
        self.say(text).await
    }

    async fn transact(&mut self, kind: OperationKind) -> io::Result<Flow> {
        let messages = self.messages;
        let Some(amount) = self.read_amount(messages.amount_prompt(kind)).await? else {
            return Ok(Flow::EndOfInput);
        };

        match self.service.apply(Operation::new(kind, amount)).await {
            Ok(_) => {
                self.say(messages.success(kind)).await?;
                self.show_balance().await?;
            }
            Err(err) => {
                let line = format!("{} {}", messages.operation_error, messages.describe(&err));
                self.say(&line).await?;
            }
        }

        Ok(Flow::Continue)
    }

    /// Keep asking until the input parses as an amount. Returns `None` when
    /// the input ends first.
    async fn read_amount(&mut self, prompt: &str) -> io::Result<Option<Amount>> {
        loop {
            self.prompt(prompt).await?;

            let Some(line) = self.read_line().await? else {
                return Ok(None);
            };

            match parse_amount(&line) {
                Ok(amount) => return Ok(Some(amount)),
                Err(err) => {
                    debug!(error = %err, "rejected amount input");
                    self.say(self.messages.invalid_value).await?;
                }
            }
        }
    }

    fn money(&self, amount: Amount) -> String {
        format!("{} {}", self.currency, format_amount(amount))
    }

    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    async fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await
    }

    async fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }
}
