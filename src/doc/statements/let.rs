/*!
# `LET <variable>=<expression>`

## Purpose
Assign a value to the variable.

## Remarks
The word `LET` is required. Variables spring into existence
the first time they are assigned. Reading a variable that was never
assigned is an error.

## Example
```text
10 LET A = 10
20 PRINT A
30 LET A = A * 2
40 PRINT A
RUN
10
20
```

*/
