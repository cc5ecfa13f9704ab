use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownSample {
    Aristocrat,
    TaleOfTwoCities,
    MobyDick,
}

impl KnownSample {
    pub fn ciphertext(&self) -> &'static str {
        match self {
            Self::Aristocrat => {
                "JF XZ VWJFNVRSJZY VI JF AZZU IFGBVIJVRSJZY XKJ WFJ XZ SXUZ JF ISO VJ"
            }

            Self::TaleOfTwoCities => {
                "AG XNF GTM JMFG BY GAEMF, AG XNF GTM XBVFG BY GAEMF, \
                 AG XNF GTM NDM BY XAFKBE, AG XNF GTM NDM BY YBBCAFTHMFF, \
                 AG XNF GTM MUBLT BY JMCAMY, AG XNF GTM MUBLT BY AHLVMKSCAGR, \
                 AG XNF GTM FMNFBH BY CADTG, AG XNF GTM FMNFBH BY KNVWHMFF."
            }

            Self::MobyDick => {
                "FXHH PU OMKPXUH. MRPU JUXQM XIR, DUSUQ PODV KRA HRDI EQUFOMUHJ, \
                 KXSODI HONNHU RQ DR PRDUJ OD PJ EZQMU, XDV DRNKODI EXQNOFZHXQ NR \
                 ODNUQUMN PU RD MKRQU, O NKRZIKN O ARZHV MXOH XBRZN X HONNHU XDV \
                 MUU NKU AXNUQJ EXQN RG NKU ARQHV."
            }
        }
    }

    /// Known decryption, where there is one.
    pub fn plaintext(&self) -> Option<&'static str> {
        match self {
            Self::Aristocrat => None,

            Self::TaleOfTwoCities => Some(
                "IT WAS THE BEST OF TIMES, IT WAS THE WORST OF TIMES, \
                 IT WAS THE AGE OF WISDOM, IT WAS THE AGE OF FOOLISHNESS, \
                 IT WAS THE EPOCH OF BELIEF, IT WAS THE EPOCH OF INCREDULITY, \
                 IT WAS THE SEASON OF LIGHT, IT WAS THE SEASON OF DARKNESS.",
            ),

            Self::MobyDick => Some(
                "CALL ME ISHMAEL. SOME YEARS AGO, NEVER MIND HOW LONG PRECISELY, \
                 HAVING LITTLE OR NO MONEY IN MY PURSE, AND NOTHING PARTICULAR TO \
                 INTEREST ME ON SHORE, I THOUGHT I WOULD SAIL ABOUT A LITTLE AND \
                 SEE THE WATERY PART OF THE WORLD.",
            ),
        }
    }
}
