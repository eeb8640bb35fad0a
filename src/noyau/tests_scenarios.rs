//! Tests scénarios : exemples chiffrés + bornes + taxonomie des erreurs.
//!
//! Les valeurs attendues sont recalculées en f64 (ln naturel) et comparées en relatif.

use num_bigint::BigInt;
use num_rational::BigRational;

use super::erreur::{ErreurRequete, GenreErreur, Grandeur};
use super::format::{titre, AIDE};
use super::{evaluer, evaluer_avec};
use crate::reglages::Reglages;

fn rat(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

fn essais_ok(requete: &str) -> f64 {
    evaluer(requete)
        .unwrap_or_else(|e| panic!("requete={requete:?} err={e}"))
        .essais
}

fn assert_proche(obtenu: f64, attendu: f64) {
    assert!(
        ((obtenu - attendu) / attendu).abs() < 1e-12,
        "obtenu={obtenu} attendu={attendu}"
    );
}

fn assert_genre(requete: &str, genre: GenreErreur) {
    match evaluer(requete) {
        Ok(r) => panic!("requete={requete:?} devait échouer, essais={}", r.essais),
        Err(e) => assert_eq!(e.genre(), genre, "requete={requete:?} err={e}"),
    }
}

/* ------------------------ Exemples chiffrés ------------------------ */

#[test]
fn de_a_six_faces_95_pourcent() {
    let r = evaluer("1/6 0.95").unwrap();
    assert_eq!(r.probabilite, rat(1, 6));
    assert_eq!(r.confiance, rat(19, 20));
    assert_proche(r.essais, 0.05f64.ln() / (5.0f64 / 6.0).ln());
    assert!((r.essais - 16.431).abs() < 1e-3);
}

#[test]
fn moitie_sans_confiance() {
    let r = evaluer("0.5").unwrap();
    assert_eq!(r.confiance, rat(1, 2));
    assert_eq!(r.essais, 1.0);
}

#[test]
fn cote_un_contre_cinq() {
    let r = evaluer("1:5").unwrap();
    assert_eq!(r.probabilite, rat(1, 6));
    assert_proche(r.essais, 0.5f64.ln() / (5.0f64 / 6.0).ln());
    assert!((r.essais - 3.802).abs() < 1e-3);
}

#[test]
fn decimal_avec_confiance() {
    assert_proche(essais_ok("0.3 0.9"), 0.1f64.ln() / 0.7f64.ln());
}

#[test]
fn cote_decimale() {
    // 1.5:2 => 1.5 / 3.5 = 3/7
    let r = evaluer("1.5:2").unwrap();
    assert_eq!(r.probabilite, rat(3, 7));
}

#[test]
fn blancs_autour_et_entre() {
    assert_eq!(evaluer("  1/6   0.95 "), evaluer("1/6 0.95"));
}

/* ------------------------ Erreurs d’analyse ------------------------ */

#[test]
fn denominateur_nul() {
    assert_eq!(
        evaluer("1/0"),
        Err(ErreurRequete::DenominateurNul("1/0".into()))
    );
    assert_genre("0:0", GenreErreur::Analyse);
    assert_genre("2:-2", GenreErreur::Analyse);
}

#[test]
fn trop_de_termes() {
    assert_eq!(evaluer("0.3 0.9 0.1"), Err(ErreurRequete::TropDeTermes(3)));
}

#[test]
fn entree_vide() {
    assert_eq!(evaluer(""), Err(ErreurRequete::Vide));
    assert_eq!(evaluer(" \t "), Err(ErreurRequete::Vide));
}

#[test]
fn nombres_invalides() {
    for q in ["abc", "1/x", "x:1", "0.5 y", "1/6 19/20", "inf", "nan", "1//2", "0,5"] {
        assert_genre(q, GenreErreur::Analyse);
    }
    assert_eq!(
        evaluer("0.5 abc"),
        Err(ErreurRequete::NombreInvalide("abc".into()))
    );
}

/* ------------------------ Erreurs de domaine ------------------------ */

#[test]
fn probabilite_hors_domaine() {
    assert_eq!(
        evaluer("1.5"),
        Err(ErreurRequete::HorsDomaine {
            grandeur: Grandeur::Probabilite,
            valeur: "3/2 (≈ 1.5)".into()
        })
    );
    for q in ["0", "1", "0/5", "5/5", "1:0", "0:3", "3/2"] {
        assert_genre(q, GenreErreur::Domaine);
    }
}

#[test]
fn confiance_hors_domaine() {
    for q in ["0.5 0", "0.5 1", "0.5 1.2", "0.5 -0.1"] {
        match evaluer(q) {
            Err(ErreurRequete::HorsDomaine { grandeur, .. }) => {
                assert_eq!(grandeur, Grandeur::Confiance, "q={q:?}")
            }
            autre => panic!("q={q:?} -> {autre:?}"),
        }
    }
}

#[test]
fn negatifs_dans_les_rapports() {
    // signe accepté à la lecture, refusé par le domaine
    assert_genre("-1/2", GenreErreur::Domaine);
    assert_genre("-1:3", GenreErreur::Domaine);
    assert_genre("-0.5", GenreErreur::Domaine);
    // -1/-2 = 1/2 : valide
    assert_eq!(evaluer("-1/-2").unwrap().probabilite, rat(1, 2));
}

#[test]
fn probabilite_minuscule_non_representable() {
    assert_eq!(evaluer("1e-400"), Err(ErreurRequete::NonRepresentable));
    assert_eq!(
        ErreurRequete::NonRepresentable.genre(),
        GenreErreur::Domaine
    );
}

/* ------------------------ Réglages ------------------------ */

#[test]
fn confiance_par_defaut_reglable() {
    let reglages = Reglages::default()
        .avec_confiance_defaut(rat(9, 10))
        .unwrap();
    let r = evaluer_avec("0.3", &reglages).unwrap();
    assert_eq!(r, evaluer("0.3 0.9").unwrap());
}

/* ------------------------ Affichage ------------------------ */

#[test]
fn phrases_affichees() {
    let r = evaluer("1/6 0.95").unwrap();
    assert_eq!(r.essais_entiers(2), 17.0);
    assert_eq!(
        titre(&r, 2),
        "Événement attendu avec une probabilité de 95 % après 17 (16.43) essais."
    );

    let r = evaluer("0.5").unwrap();
    assert_eq!(
        titre(&r, 2),
        "Événement attendu avec une probabilité de 50 % après 1 essai."
    );

    let r = evaluer("1:5").unwrap();
    assert_eq!(
        titre(&r, 2),
        "Événement attendu avec une probabilité de 50 % après 4 (3.8) essais."
    );

    let r = evaluer("0.3 0.999").unwrap();
    assert!(titre(&r, 2).contains("99.9 %"), "{}", titre(&r, 2));
}

#[test]
fn phrases_sous_un_essai() {
    // ln(0.7) / ln(0.1) ≈ 0.155 : pluriel, le singulier est réservé à 1
    let r = evaluer("0.9 0.3").unwrap();
    assert_eq!(
        titre(&r, 2),
        "Événement attendu avec une probabilité de 30 % après 1 (0.15) essais."
    );

    // arrondi à 0 : "0 essais", sans parenthèses
    let r = evaluer("0.9999 0.001").unwrap();
    assert_eq!(
        titre(&r, 2),
        "Événement attendu avec une probabilité de 0.1 % après 0 essais."
    );
}

#[test]
fn tres_grand_nombre_d_essais() {
    // p = 1e-300 : ≈ 6.93e299 essais, bien au-delà de u64
    let r = evaluer("1e-300").unwrap();
    assert!(r.essais > u64::MAX as f64);

    for decimales in [2, 12] {
        assert_eq!(r.essais_entiers(decimales), r.essais.ceil());

        let t = titre(&r, decimales);
        assert!(t.starts_with("Événement attendu avec une probabilité de 50 % après 6931471805599"), "{t}");
        assert!(t.ends_with(" essais."), "{t}");
        assert!(!t.contains("18446744073709551615"), "{t}");
        assert!(!t.contains('('), "{t}");
        assert!(!t.contains("inf"), "{t}");
    }
}

#[test]
fn aide_non_vide() {
    assert!(AIDE.contains("n:m"));
    assert!(ErreurRequete::TropDeTermes(3).to_string().contains('3'));
}
