#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BankDescriptor {
    pub display_name: &'static str,
    /// Registrable domain of the bank's card pages, used for site-restricted
    /// search queries and for attributing result links to a bank.
    pub domain: &'static str,
    /// Lower-case tokens that identify the bank in free text.
    pub aliases: &'static [&'static str],
    /// Major banks receive a synthesized offer when every data tier is dry.
    pub major: bool,
}

const ALL_BANKS: [BankDescriptor; 8] = [
    BankDescriptor {
        display_name: "HDFC Bank",
        domain: "hdfcbank.com",
        aliases: &["hdfc"],
        major: true,
    },
    BankDescriptor {
        display_name: "ICICI Bank",
        domain: "icicibank.com",
        aliases: &["icici"],
        major: true,
    },
    BankDescriptor {
        display_name: "SBI Card",
        domain: "sbicard.com",
        aliases: &["sbi", "state bank"],
        major: true,
    },
    BankDescriptor {
        display_name: "Axis Bank",
        domain: "axisbank.com",
        aliases: &["axis"],
        major: true,
    },
    BankDescriptor {
        display_name: "Kotak Mahindra Bank",
        domain: "kotak.com",
        aliases: &["kotak"],
        major: true,
    },
    BankDescriptor {
        display_name: "Yes Bank",
        domain: "yesbank.in",
        aliases: &["yes bank"],
        major: false,
    },
    BankDescriptor {
        display_name: "IndusInd Bank",
        domain: "indusind.com",
        aliases: &["indusind"],
        major: false,
    },
    BankDescriptor {
        display_name: "Standard Chartered",
        domain: "sc.com",
        aliases: &["standard chartered", "stanchart"],
        major: false,
    },
];

pub fn banks() -> &'static [BankDescriptor] {
    &ALL_BANKS
}

pub fn major_banks() -> impl Iterator<Item = &'static BankDescriptor> {
    ALL_BANKS.iter().filter(|bank| bank.major)
}

/// Matches a host against a bank's registrable domain, subdomains included.
pub fn bank_for_domain(host: &str) -> Option<&'static BankDescriptor> {
    let host = host.to_ascii_lowercase();
    ALL_BANKS.iter().find(|bank| {
        host.strip_suffix(bank.domain)
            .is_some_and(|rest| rest.is_empty() || rest.ends_with('.'))
    })
}

/// Scans free text (a result title or snippet) for a known bank alias.
pub fn bank_for_text(text: &str) -> Option<&'static BankDescriptor> {
    let haystack = text.to_lowercase();
    ALL_BANKS
        .iter()
        .find(|bank| bank.aliases.iter().any(|alias| haystack.contains(alias)))
}
