// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurRequete;
use super::format::format_rat;

/// Garde-fou : longueur max d’un nombre tapé (anti-abus / anti-gel).
const LONGUEUR_MAX: usize = 64;

/// Garde-fou : |exposant| max accepté dans la notation `1e-3`.
const EXPOSANT_MAX: u64 = 400;

/// Terme de probabilité reconnu (valeurs exactes, pas encore normalisées).
#[derive(Clone, Debug, PartialEq)]
pub enum Terme {
    /// `n:m` : n favorables contre m défavorables
    Cote(BigRational, BigRational),
    /// `n/m` : n succès sur m essais
    Fraction(BigRational, BigRational),
    /// `0.n` (ou toute écriture décimale)
    Decimal(BigRational),
}

impl Terme {
    /// Ramène le terme à une probabilité : n/(n+m), n/m ou la valeur telle quelle.
    /// Le domaine ]0, 1[ n’est PAS vérifié ici (voir calcul.rs).
    pub fn normaliser(&self) -> Result<BigRational, ErreurRequete> {
        match self {
            Terme::Cote(n, m) => {
                let total = n + m;
                if total.is_zero() {
                    return Err(ErreurRequete::DenominateurNul(format_terme(self)));
                }
                Ok(n / total)
            }
            Terme::Fraction(n, m) => {
                if m.is_zero() {
                    return Err(ErreurRequete::DenominateurNul(format_terme(self)));
                }
                Ok(n / m)
            }
            Terme::Decimal(x) => Ok(x.clone()),
        }
    }
}

/// Découpe la requête en 1 ou 2 termes (séparés par des blancs).
pub fn decouper(requete: &str) -> Result<(&str, Option<&str>), ErreurRequete> {
    let termes: Vec<&str> = requete.split_whitespace().collect();
    match termes.as_slice() {
        [] => Err(ErreurRequete::Vide),
        [p] => Ok((*p, None)),
        [p, c] => Ok((*p, Some(*c))),
        _ => Err(ErreurRequete::TropDeTermes(termes.len())),
    }
}

/// Reconnaît un terme de probabilité.
/// Priorité : `n:m` (cote) puis `n/m` (fraction) puis décimal.
pub fn lire_terme(terme: &str) -> Result<Terme, ErreurRequete> {
    let invalide = || ErreurRequete::NombreInvalide(terme.to_string());

    if let Some((n, m)) = terme.split_once(':') {
        let n = lire_nombre(n).ok_or_else(invalide)?;
        let m = lire_nombre(m).ok_or_else(invalide)?;
        return Ok(Terme::Cote(n, m));
    }

    if let Some((n, m)) = terme.split_once('/') {
        let n = lire_nombre(n).ok_or_else(invalide)?;
        let m = lire_nombre(m).ok_or_else(invalide)?;
        return Ok(Terme::Fraction(n, m));
    }

    lire_nombre(terme).map(Terme::Decimal).ok_or_else(invalide)
}

/// La confiance ne s’écrit qu’en décimal.
pub fn lire_confiance(terme: &str) -> Result<BigRational, ErreurRequete> {
    lire_nombre(terme).ok_or_else(|| ErreurRequete::NombreInvalide(terme.to_string()))
}

/// Lecture EXACTE d’un nombre décimal : `[+-]chiffres[.chiffres][e[+-]chiffres]`.
/// Accepte aussi `.5` et `5.`. Refuse `inf`, `nan`, vide, séparateurs multiples.
pub fn lire_nombre(s: &str) -> Option<BigRational> {
    if s.is_empty() || s.len() > LONGUEUR_MAX {
        return None;
    }

    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    // signe
    let mut negatif = false;
    if chars[0] == '+' || chars[0] == '-' {
        negatif = chars[0] == '-';
        i = 1;
    }

    // mantisse (chiffres sans le point) + nb de chiffres après le point
    let mut chiffres = String::new();
    let mut vu_point = false;
    let mut apres_point: i64 = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            chiffres.push(c);
            if vu_point {
                apres_point += 1;
            }
        } else if c == '.' && !vu_point {
            vu_point = true;
        } else {
            break;
        }
        i += 1;
    }

    if chiffres.is_empty() {
        return None;
    }

    // exposant optionnel
    let mut exposant: i64 = 0;
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        i += 1;
        let mut exp_negatif = false;
        if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
            exp_negatif = chars[i] == '-';
            i += 1;
        }
        let debut = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if debut == i {
            return None;
        }
        let e_str: String = chars[debut..i].iter().collect();
        let e = e_str.parse::<u64>().ok()?;
        if e > EXPOSANT_MAX {
            return None;
        }
        exposant = if exp_negatif { -(e as i64) } else { e as i64 };
    }

    // reste non lu => pas un nombre
    if i != chars.len() {
        return None;
    }

    let mantisse = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    let mantisse = if negatif { -mantisse } else { mantisse };

    let echelle = exposant - apres_point;
    let dix = BigInt::from(10);
    let r = if echelle >= 0 {
        BigRational::from_integer(mantisse * dix.pow(echelle as u32))
    } else {
        BigRational::new(mantisse, dix.pow((-echelle) as u32))
    };

    log::trace!("nombre lu: {s:?} -> {}", format_rat(&r));
    Some(r)
}

/// Format utilitaire (démarche) : terme reconnu en texte.
pub fn format_terme(t: &Terme) -> String {
    match t {
        Terme::Cote(n, m) => format!("{}:{}", format_rat(n), format_rat(m)),
        Terme::Fraction(n, m) => format!("{}/{}", format_rat(n), format_rat(m)),
        Terme::Decimal(x) => format_rat(x),
    }
}
