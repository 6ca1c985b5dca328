use clap::ValueEnum;

use crate::domain::{AccountError, OperationKind};

/// Language used by the console menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Pt => &PT,
        }
    }
}

/// Every piece of text the console menu prints.
pub struct Messages {
    pub welcome: &'static str,
    pub menu_title: &'static str,
    pub menu_items: [&'static str; 7],
    pub choose_option: &'static str,
    pub empty_option: &'static str,
    pub not_a_number: &'static str,
    pub invalid_option: &'static str,
    pub goodbye: &'static str,

    pub balance: &'static str,
    pub total_limit: &'static str,
    pub used: &'static str,
    pub available: &'static str,
    pub using_overdraft: &'static str,
    pub not_using_overdraft: &'static str,

    pub deposit_prompt: &'static str,
    pub withdraw_prompt: &'static str,
    pub bill_prompt: &'static str,
    pub invalid_value: &'static str,
    pub deposit_done: &'static str,
    pub withdraw_done: &'static str,
    pub bill_done: &'static str,

    pub operation_error: &'static str,
    pub invalid_deposit: &'static str,
    pub invalid_operation: &'static str,
    pub insufficient_funds: &'static str,
    pub invalid_opening: &'static str,
}

impl Messages {
    pub fn amount_prompt(&self, kind: OperationKind) -> &'static str {
        match kind {
            OperationKind::Deposit => self.deposit_prompt,
            OperationKind::Withdrawal => self.withdraw_prompt,
            OperationKind::BillPayment => self.bill_prompt,
        }
    }

    pub fn success(&self, kind: OperationKind) -> &'static str {
        match kind {
            OperationKind::Deposit => self.deposit_done,
            OperationKind::Withdrawal => self.withdraw_done,
            OperationKind::BillPayment => self.bill_done,
        }
    }

    /// Localized text for a refused operation.
    pub fn describe(&self, err: &AccountError) -> String {
        match err {
            AccountError::InvalidAmount {
                kind: OperationKind::Deposit,
                ..
            } => self.invalid_deposit.to_string(),
            AccountError::InvalidAmount { .. } => self.invalid_operation.to_string(),
            AccountError::InsufficientFunds { .. } => self.insufficient_funds.to_string(),
            AccountError::InvalidOpening(_) => self.invalid_opening.to_string(),
        }
    }
}

static EN: Messages = Messages {
    welcome: "Welcome to the CLI Bank!",
    menu_title: "*** Main Menu ***",
    menu_items: [
        "1. Check Balance",
        "2. Check Overdraft (Limit and Usage)",
        "3. Deposit Money",
        "4. Withdraw Money",
        "5. Pay a Bill",
        "6. Check if Using Overdraft",
        "0. Exit",
    ],
    choose_option: "Choose an option: ",
    empty_option: "Please enter an option.",
    not_a_number: "Error: Please enter a valid number for the option.",
    invalid_option: "Invalid option. Try again.",
    goodbye: "Thank you for using our services. Exiting...",

    balance: "Your current balance is:",
    total_limit: "Total Limit:",
    used: "Used:",
    available: "Available:",
    using_overdraft: "Yes, you are currently using your overdraft.",
    not_using_overdraft: "No, you are not using your overdraft.",

    deposit_prompt: "Enter the amount to deposit (e.g., 50.00): ",
    withdraw_prompt: "Enter the amount to withdraw (e.g., 100.00): ",
    bill_prompt: "Enter the bill amount (e.g., 75.50): ",
    invalid_value: "Invalid value. Use format 50.00 or 50,00.",
    deposit_done: "Deposit successful.",
    withdraw_done: "Withdrawal successful.",
    bill_done: "Bill paid successfully.",

    operation_error: "Operation Error:",
    invalid_deposit: "The deposit amount must be positive.",
    invalid_operation: "The operation amount must be positive.",
    insufficient_funds: "Insufficient funds (including overdraft).",
    invalid_opening: "The opening balance or overdraft limit is invalid.",
};

static PT: Messages = Messages {
    welcome: "Bem-vindo ao Banco CLI!",
    menu_title: "*** Menu Principal ***",
    menu_items: [
        "1. Consultar Saldo",
        "2. Consultar Cheque Especial (Limite e Uso)",
        "3. Depositar Dinheiro",
        "4. Sacar Dinheiro",
        "5. Pagar um Boleto",
        "6. Verificar se Está Usando o Cheque Especial",
        "0. Sair",
    ],
    choose_option: "Escolha uma opção: ",
    empty_option: "Por favor, digite uma opção.",
    not_a_number: "Erro: Por favor, digite um número válido para a opção.",
    invalid_option: "Opção inválida. Tente novamente.",
    goodbye: "Obrigado por usar nossos serviços. Saindo...",

    balance: "Seu saldo atual é:",
    total_limit: "Limite Total:",
    used: "Utilizado:",
    available: "Disponível:",
    using_overdraft: "Sim, você está usando o cheque especial.",
    not_using_overdraft: "Não, você não está usando o cheque especial.",

    deposit_prompt: "Digite o valor do depósito (ex: 50,00): ",
    withdraw_prompt: "Digite o valor do saque (ex: 100,00): ",
    bill_prompt: "Digite o valor do boleto (ex: 75,50): ",
    invalid_value: "Valor inválido. Use o formato 50.00 ou 50,00.",
    deposit_done: "Depósito realizado com sucesso.",
    withdraw_done: "Saque realizado com sucesso.",
    bill_done: "Boleto pago com sucesso.",

    operation_error: "Erro na operação:",
    invalid_deposit: "O valor do depósito deve ser positivo.",
    invalid_operation: "O valor da operação deve ser positivo.",
    insufficient_funds: "Saldo insuficiente (incluindo cheque especial).",
    invalid_opening: "O saldo inicial ou o limite do cheque especial é inválido.",
};
