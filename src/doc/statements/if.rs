/*!
# `IF <expression> THEN <statement>`

## Purpose
Do something contingent on a predicate.

## Remarks
Any value other than zero is true. The single statement after `THEN`
runs on the same line. When the expression is zero, the rest of the
line is skipped without being looked at. There is no `ELSE`.

## Example
```text
10 LET A=10
20 IF A<30 THEN GOSUB 100
30 IF A<30 THEN GOTO 20
90 END
100 PRINT A
110 LET A=A+10
120 RETURN
RUN
10
20
```

*/
