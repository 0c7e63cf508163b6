/// Protocol identifiers the dispatch registry is indexed by.
///
/// These are the IEEE-assigned EtherType numbers for the protocols the
/// pipeline routes, held in host byte order. Wire reads go through
/// `u16::from_be_bytes` before conversion; decapsulated payloads that never
/// appear in an Ethernet frame themselves are routed under the same numbers.
#[repr(u16)]
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub enum EtherType {
    /// Internet Protocol version 4.
    Ipv4 = 0x0800,
    /// Transparent Ethernet bridging, used for Ethernet-in-X payloads.
    Ethernet = 0x6558,
    /// Internet Protocol version 6.
    Ipv6 = 0x86DD,
    /// MPLS unicast label stack.
    Mpls = 0x8847,
    /// Network Service Header.
    Nsh = 0x894F,
}

// Converting a u16 into an EtherType is how parsed frames and decapsulated
// payloads find their registry key; unknown numbers come back as the error.
impl TryFrom<u16> for EtherType {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0x0800 => Ok(EtherType::Ipv4),
            0x6558 => Ok(EtherType::Ethernet),
            0x86DD => Ok(EtherType::Ipv6),
            0x8847 => Ok(EtherType::Mpls),
            0x894F => Ok(EtherType::Nsh),
            _ => Err(value),
        }
    }
}

impl From<EtherType> for u16 {
    fn from(ether_type: EtherType) -> Self {
        ether_type as u16
    }
}

impl EtherType {
    /// Returns a human-readable label for diagnostics and logging.
    ///
    /// # Examples
    /// ```
    /// # use network_types::eth::EtherType;
    /// assert_eq!(EtherType::Ipv4.as_str(), "ipv4");
    /// assert_eq!(EtherType::Nsh.as_str(), "nsh");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            EtherType::Ipv4 => "ipv4",
            EtherType::Ethernet => "ethernet",
            EtherType::Ipv6 => "ipv6",
            EtherType::Mpls => "mpls",
            EtherType::Nsh => "nsh",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ethertype_try_from_u16_known() {
        assert_eq!(EtherType::try_from(0x0800), Ok(EtherType::Ipv4));
        assert_eq!(EtherType::try_from(0x86DD), Ok(EtherType::Ipv6));
        assert_eq!(EtherType::try_from(0x6558), Ok(EtherType::Ethernet));
        assert_eq!(EtherType::try_from(0x8847), Ok(EtherType::Mpls));
        assert_eq!(EtherType::try_from(0x894F), Ok(EtherType::Nsh));
    }

    #[test]
    fn test_ethertype_try_from_u16_unknown() {
        assert_eq!(EtherType::try_from(0x1234), Err(0x1234));
        // MPLS multicast is not routed by the pipeline
        assert_eq!(EtherType::try_from(0x8848), Err(0x8848));
    }

    #[test]
    fn test_u16_from_ethertype() {
        assert_eq!(u16::from(EtherType::Ipv4), 0x0800);
        assert_eq!(u16::from(EtherType::Ipv6), 0x86DD);
        assert_eq!(u16::from(EtherType::Mpls), 0x8847);
        assert_eq!(u16::from(EtherType::Nsh), 0x894F);
    }

    #[test]
    fn test_ethertype_as_str() {
        assert_eq!(EtherType::Ipv4.as_str(), "ipv4");
        assert_eq!(EtherType::Ethernet.as_str(), "ethernet");
        assert_eq!(EtherType::Ipv6.as_str(), "ipv6");
        assert_eq!(EtherType::Mpls.as_str(), "mpls");
        assert_eq!(EtherType::Nsh.as_str(), "nsh");
    }
}
