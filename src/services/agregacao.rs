// src/services/agregacao.rs
//! Cálculos dos relatórios, sobre as listas já lidas da base de dados.
//!
//! Regras comuns:
//! - minutos NULL contam como zero nas somas;
//! - as vistas por advogado estão em horas (`minutos / 60.0`);
//! - as vistas do dashboard (top e por departamento) ficam em MINUTOS.
//!   Esta diferença faz parte do contrato da API e está coberta por testes.
//! - um grupo com chave NULL é um grupo como os outros; empates mantêm a
//!   ordem em que o grupo apareceu pela primeira vez.

use crate::models::{
    advogado::Advogado,
    hora::Hora,
    relatorio::{
        AdvogadosPorDepartamento, EvolucaoMensal, HorasPorDepartamento, TopAdvogado,
        TotalHorasAdvogado,
    },
};
use chrono::Datelike;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Quantos advogados entram no top do dashboard.
pub const TOP_ADVOGADOS: usize = 5;

pub fn minutos_para_horas(minutos: i64) -> f64 {
    minutos as f64 / 60.0
}

// Soma os valores por chave, preservando a ordem de primeira aparição
fn somar_por_chave<K, I>(itens: I) -> Vec<(K, i64)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = (K, i64)>,
{
    let mut posicoes: HashMap<K, usize> = HashMap::new();
    let mut grupos: Vec<(K, i64)> = Vec::new();

    for (chave, valor) in itens {
        match posicoes.get(&chave) {
            Some(&i) => grupos[i].1 += valor,
            None => {
                posicoes.insert(chave.clone(), grupos.len());
                grupos.push((chave, valor));
            }
        }
    }
    grupos
}

// Ordena por total descendente; sort_by é estável, os empates ficam como estão
fn ordenar_desc<K>(grupos: &mut [(K, i64)]) {
    grupos.sort_by(|a, b| b.1.cmp(&a.1));
}

/// Total de horas de cada advogado. Advogados sem registos ficam com 0.0.
pub fn total_horas_por_advogado(advogados: &[Advogado], horas: &[Hora]) -> Vec<TotalHorasAdvogado> {
    let mut minutos_por_id: HashMap<i64, i64> = HashMap::new();
    for hora in horas {
        if let (Some(id), Some(minutos)) = (hora.id_advogado, hora.minutos_registados) {
            *minutos_por_id.entry(id).or_insert(0) += minutos;
        }
    }

    advogados
        .iter()
        .map(|a| TotalHorasAdvogado {
            advogado_id: a.id,
            nome_completo: a.nome_completo(),
            total_horas: minutos_para_horas(minutos_por_id.get(&a.id).copied().unwrap_or(0)),
        })
        .collect()
}

/// Soma de todos os minutos registados, atribuídos ou não, em horas.
pub fn total_horas(horas: &[Hora]) -> f64 {
    minutos_para_horas(horas.iter().map(Hora::minutos).sum())
}

/// Horas por (ano, mês) de um advogado, por ordem cronológica.
/// Só entram registos com data e minutos; meses sem registos não aparecem.
pub fn evolucao_mensal(horas: &[Hora], id_advogado: i64) -> Vec<EvolucaoMensal> {
    let mut por_mes: BTreeMap<(i32, u32), i64> = BTreeMap::new();

    for hora in horas.iter().filter(|h| h.id_advogado == Some(id_advogado)) {
        if let (Some(data), Some(minutos)) = (hora.data, hora.minutos_registados) {
            *por_mes.entry((data.year(), data.month())).or_insert(0) += minutos;
        }
    }

    por_mes
        .into_iter()
        .map(|((ano, mes), minutos)| EvolucaoMensal {
            ano,
            mes,
            total_horas: minutos_para_horas(minutos),
        })
        .collect()
}

/// Os `n` advogados com mais minutos registados.
///
/// O grupo dos registos sem advogado entra na ordenação (e pode ocupar um
/// lugar), mas, tal como qualquer ID sem advogado correspondente, é
/// descartado na junção. O resultado pode ter menos de `n` entradas.
pub fn top_advogados(horas: &[Hora], advogados: &[Advogado], n: usize) -> Vec<TopAdvogado> {
    let mut grupos = somar_por_chave(horas.iter().map(|h| (h.id_advogado, h.minutos())));
    ordenar_desc(&mut grupos);

    let por_id: HashMap<i64, &Advogado> = advogados.iter().map(|a| (a.id, a)).collect();

    grupos
        .into_iter()
        .take(n)
        .filter_map(|(id, total_minutos)| {
            let advogado = id.and_then(|id| por_id.get(&id))?;
            Some(TopAdvogado {
                id: advogado.id,
                nome: advogado.nome.clone(),
                sobrenome: advogado.sobrenome.clone(),
                departamento: advogado.departamento.clone(),
                total_minutos,
            })
        })
        .collect()
}

/// Minutos por departamento do próprio registo de horas (sem conversão).
pub fn horas_por_departamento(horas: &[Hora]) -> Vec<HorasPorDepartamento> {
    let mut grupos = somar_por_chave(horas.iter().map(|h| (h.departamento.clone(), h.minutos())));
    ordenar_desc(&mut grupos);

    grupos
        .into_iter()
        .map(|(departamento, total_minutos)| HorasPorDepartamento {
            departamento,
            total_minutos,
        })
        .collect()
}

pub fn advogados_por_departamento(advogados: &[Advogado]) -> Vec<AdvogadosPorDepartamento> {
    let mut grupos = somar_por_chave(advogados.iter().map(|a| (a.departamento.clone(), 1)));
    ordenar_desc(&mut grupos);

    grupos
        .into_iter()
        .map(|(departamento, total_advogados)| AdvogadosPorDepartamento {
            departamento,
            total_advogados,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn advogado(id: i64, nome: &str, departamento: &str) -> Advogado {
        Advogado {
            id,
            nome: nome.to_string(),
            sobrenome: "Silva".to_string(),
            email: format!("{}@firma.pt", nome.to_lowercase()),
            departamento: departamento.to_string(),
            escalao: "Associado".to_string(),
            cidade: "Lisboa".to_string(),
            aniversario: NaiveDate::from_ymd_opt(1985, 4, 12).unwrap(),
        }
    }

    fn hora(
        id_advogado: Option<i64>,
        minutos: Option<i64>,
        departamento: Option<&str>,
        data: Option<(i32, u32, u32)>,
    ) -> Hora {
        Hora {
            id: None,
            caso: None,
            id_advogado,
            minutos_registados: minutos,
            departamento: departamento.map(str::to_string),
            data: data.and_then(|(a, m, d)| NaiveDate::from_ymd_opt(a, m, d)),
        }
    }

    // Advogados 1..=n, todos do Civil
    fn advogados_civil(n: i64) -> Vec<Advogado> {
        (1..=n).map(|id| advogado(id, &format!("A{}", id), "Civil")).collect()
    }

    // Um registo por advogado 1..=n, com id * 10 minutos
    fn horas_crescentes(n: i64) -> Vec<Hora> {
        (1..=n).map(|id| hora(Some(id), Some(id * 10), None, None)).collect()
    }

    fn ids(top: &[TopAdvogado]) -> Vec<i64> {
        top.iter().map(|t| t.id).collect()
    }

    #[test]
    fn minutos_nulos_nao_contam_para_o_total_do_advogado() {
        let advogados = vec![advogado(1, "Ana", "Civil")];
        let horas = vec![
            hora(Some(1), Some(30), None, None),
            hora(Some(1), Some(45), None, None),
            hora(Some(1), None, None, None),
        ];

        let totais = total_horas_por_advogado(&advogados, &horas);
        assert_eq!(totais.len(), 1);
        assert_eq!(totais[0].advogado_id, 1);
        assert_eq!(totais[0].nome_completo, "Ana Silva");
        assert_eq!(totais[0].total_horas, 1.25);
    }

    #[test]
    fn advogado_sem_registos_tem_zero_horas() {
        let advogados = vec![advogado(1, "Ana", "Civil"), advogado(2, "Rui", "Penal")];
        let horas = vec![hora(Some(1), Some(60), None, None)];

        let totais = total_horas_por_advogado(&advogados, &horas);
        assert_eq!(totais[1].advogado_id, 2);
        assert_eq!(totais[1].total_horas, 0.0);
    }

    #[test]
    fn total_geral_inclui_registos_sem_advogado() {
        let advogados = vec![advogado(1, "Ana", "Civil")];
        let horas = vec![
            hora(Some(1), Some(60), None, None),
            hora(None, Some(30), None, None),
            hora(Some(99), Some(30), None, None),
            hora(Some(1), None, None, None),
        ];

        assert_eq!(total_horas(&horas), 2.0);
        // A soma por advogado só vê os registos atribuídos a advogados existentes
        let soma: f64 = total_horas_por_advogado(&advogados, &horas)
            .iter()
            .map(|t| t.total_horas)
            .sum();
        assert_eq!(soma, 1.0);
    }

    #[test]
    fn total_geral_sem_registos_e_zero() {
        assert_eq!(total_horas(&[]), 0.0);
    }

    #[test]
    fn evolucao_mensal_ordenada_e_sem_meses_vazios() {
        let horas = vec![
            hora(Some(1), Some(120), None, Some((2024, 3, 10))),
            hora(Some(1), Some(60), None, Some((2023, 12, 1))),
            hora(Some(1), Some(30), None, Some((2024, 3, 28))),
            hora(Some(1), Some(90), None, Some((2024, 1, 5))),
            hora(Some(1), None, None, Some((2024, 2, 1))),
            hora(Some(1), Some(600), None, None),
            hora(Some(2), Some(60), None, Some((2024, 2, 1))),
        ];

        let meses: Vec<(i32, u32, f64)> = evolucao_mensal(&horas, 1)
            .into_iter()
            .map(|e| (e.ano, e.mes, e.total_horas))
            .collect();

        assert_eq!(meses, vec![(2023, 12, 1.0), (2024, 1, 1.5), (2024, 3, 2.5)]);
    }

    #[test]
    fn evolucao_mensal_de_advogado_sem_registos_e_vazia() {
        let horas = vec![hora(Some(1), Some(60), None, Some((2024, 1, 1)))];
        assert!(evolucao_mensal(&horas, 42).is_empty());
    }

    #[test]
    fn top_ordena_desc_e_limita() {
        let top = top_advogados(&horas_crescentes(7), &advogados_civil(7), TOP_ADVOGADOS);
        assert_eq!(ids(&top), vec![7, 6, 5, 4, 3]);
        assert_eq!(top[0].total_minutos, 70);
    }

    #[test]
    fn top_empates_mantem_ordem_de_entrada() {
        let advogados = advogados_civil(3);
        let horas = vec![
            hora(Some(2), Some(50), None, None),
            hora(Some(3), Some(80), None, None),
            hora(Some(1), Some(50), None, None),
        ];

        let top = top_advogados(&horas, &advogados, TOP_ADVOGADOS);
        assert_eq!(ids(&top), vec![3, 2, 1]);
    }

    #[test]
    fn top_descarta_grupos_sem_advogado_depois_de_cortar() {
        let advogados = advogados_civil(5);
        let mut horas = horas_crescentes(5);
        // Sem advogado e advogado inexistente ocupam os dois primeiros lugares
        horas.push(hora(None, Some(1000), None, None));
        horas.push(hora(Some(99), Some(900), None, None));

        let top = top_advogados(&horas, &advogados, TOP_ADVOGADOS);
        assert_eq!(ids(&top), vec![5, 4, 3]);
    }

    #[test]
    fn departamento_em_minutos_e_por_advogado_em_horas() {
        // Regressão: o dashboard por departamento NÃO converte para horas
        let advogados = vec![advogado(1, "Ana", "Civil")];
        let horas = vec![
            hora(Some(1), Some(90), Some("Civil"), None),
            hora(Some(1), Some(30), Some("Civil"), None),
        ];

        let por_departamento = horas_por_departamento(&horas);
        let por_advogado = total_horas_por_advogado(&advogados, &horas);

        assert_eq!(por_departamento[0].total_minutos, 120);
        assert_eq!(por_advogado[0].total_horas, 2.0);
        assert_eq!(por_departamento[0].total_minutos as f64, 60.0 * por_advogado[0].total_horas);
    }

    #[test]
    fn departamento_usa_o_campo_do_registo_e_mantem_nulos() {
        let horas = vec![
            hora(Some(1), Some(200), Some("Civil"), None),
            hora(Some(2), Some(100), Some("Penal"), None),
            hora(Some(3), Some(300), Some("Civil"), None),
            hora(Some(3), Some(250), None, None),
            hora(Some(2), None, Some("Penal"), None),
        ];

        let linhas = horas_por_departamento(&horas);
        assert_eq!(
            linhas,
            vec![
                HorasPorDepartamento { departamento: Some("Civil".into()), total_minutos: 500 },
                HorasPorDepartamento { departamento: None, total_minutos: 250 },
                HorasPorDepartamento { departamento: Some("Penal".into()), total_minutos: 100 },
            ]
        );
    }

    #[test]
    fn contagem_de_advogados_por_departamento() {
        let advogados = vec![
            advogado(1, "Ana", "Penal"),
            advogado(2, "Rui", "Civil"),
            advogado(3, "Eva", "Civil"),
            advogado(4, "Luís", "Fiscal"),
        ];

        let linhas: Vec<(String, i64)> = advogados_por_departamento(&advogados)
            .into_iter()
            .map(|l| (l.departamento, l.total_advogados))
            .collect();
        assert_eq!(
            linhas,
            vec![("Civil".into(), 2), ("Penal".into(), 1), ("Fiscal".into(), 1)]
        );
    }
}
